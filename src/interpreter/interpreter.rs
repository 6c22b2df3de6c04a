//! Interpreter
//!
//! Owns the command history and session environment, and runs one input
//! line at a time against a file system it borrows.

use crate::commands::{CommandOutput, SessionEnv};
use crate::fs::VirtualFileSystem;
use crate::interpreter::completion::{complete, Completion};
use crate::interpreter::errors::PipelineError;
use crate::interpreter::history::History;
use crate::interpreter::pipeline_execution::{parse_line, Session};

#[derive(Debug, Default)]
pub struct Interpreter {
    history: History,
    env: SessionEnv,
}

impl Interpreter {
    pub fn new(env: SessionEnv) -> Self {
        Self { history: History::new(), env }
    }

    pub fn env(&self) -> &SessionEnv {
        &self.env
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Run one input line.
    ///
    /// A blank line yields empty output and is not recorded. Any other line
    /// is recorded before parsing, so failing lines show up in `history`
    /// too.
    pub fn execute(
        &mut self,
        fs: &mut VirtualFileSystem,
        input: &str,
    ) -> Result<CommandOutput, PipelineError> {
        let line = input.trim();
        if line.is_empty() {
            return Ok(CommandOutput::empty());
        }
        self.history.push(line);

        let parsed = parse_line(line)?;
        let mut session = Session {
            fs,
            env: &self.env,
            history: self.history.entries(),
        };
        session.run_line(&parsed).map_err(|e| {
            tracing::debug!(line = %line, error = %e, "command failed");
            PipelineError::from(e)
        })
    }

    pub fn complete(&self, fs: &VirtualFileSystem, input: &str) -> Completion {
        complete(input, fs)
    }
}
