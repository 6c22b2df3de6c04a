//! Interpreter Errors
//!
//! A failed line surfaces the failing command's error behind the shell's
//! `bash: ` namespace.

use thiserror::Error;

use crate::commands::CommandError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("bash: {0}")]
pub struct PipelineError(#[from] pub CommandError);

impl PipelineError {
    pub fn inner(&self) -> &CommandError {
        &self.0
    }
}
