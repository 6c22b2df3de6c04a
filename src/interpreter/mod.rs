//! Interpreter module
//!
//! Tokenizing, pipeline and redirection execution, history recall and tab
//! completion for the simulated shell.

pub mod completion;
pub mod errors;
pub mod history;
#[allow(clippy::module_inception)]
pub mod interpreter;
pub mod pipeline_execution;
pub mod tokenizer;

pub use completion::{complete, Completion};
pub use errors::PipelineError;
pub use history::History;
pub use interpreter::Interpreter;
pub use pipeline_execution::{parse_line, ParsedLine, Session, REDIRECT_OPERATOR};
pub use tokenizer::tokenize;
