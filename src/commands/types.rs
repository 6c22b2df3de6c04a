// src/commands/types.rs
use chrono::{DateTime, Local};
use thiserror::Error;

use crate::fs::{FsError, VirtualFileSystem};

/// What a built-in hands back to the interpreter.
///
/// Only `Text` carries pipeable output. The other variants are signals for
/// the host (terminal widget, editor panel, import/export collaborators);
/// piped into a later stage they read as empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Text(String),
    ClearScreen,
    OpenEditor { path: String, content: String },
    Import,
    Export { file_name: String, json: String },
    Exit { backup: String },
}

impl CommandOutput {
    pub fn text(s: impl Into<String>) -> Self {
        CommandOutput::Text(s.into())
    }

    pub fn empty() -> Self {
        CommandOutput::Text(String::new())
    }

    /// The text this output contributes to a pipe.
    pub fn into_text(self) -> String {
        match self {
            CommandOutput::Text(s) => s,
            _ => String::new(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CommandOutput::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Errors surfaced by built-ins and the pipeline parser.
///
/// The interpreter renders these behind a `bash: ` prefix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{command}: missing operand")]
    MissingOperand { command: &'static str },

    #[error("{command}: '{path}': No such file or directory")]
    NotFound { command: &'static str, path: String },

    #[error("{command}: '{path}': Not a directory")]
    NotADirectory { command: &'static str, path: String },

    #[error("{command}: '{path}': Not a regular file")]
    NotAFile { command: &'static str, path: String },

    #[error("{command}: '{path}': File exists")]
    AlreadyExists { command: &'static str, path: String },

    #[error("{command}: failed to remove '{path}': Directory not empty")]
    NonEmptyDirectory { command: &'static str, path: String },

    #[error("syntax error: {0}")]
    SyntaxError(String),

    #[error("{0}: command not found")]
    CommandNotFound(String),

    #[error("redirection failed: {0}")]
    RedirectionFailed(String),

    #[error("{command}: {message}")]
    Usage { command: &'static str, message: String },

    #[error("{command}: {source}")]
    Fs { command: &'static str, source: FsError },
}

impl CommandError {
    /// Re-wrap a file system error on behalf of `command`.
    pub fn from_fs(command: &'static str, err: FsError) -> Self {
        match err {
            FsError::NotFound { path } => CommandError::NotFound { command, path },
            FsError::NotADirectory { path } => CommandError::NotADirectory { command, path },
            FsError::NotAFile { path } => CommandError::NotAFile { command, path },
            FsError::AlreadyExists { path } => CommandError::AlreadyExists { command, path },
            source => CommandError::Fs { command, source },
        }
    }

    pub fn usage(command: &'static str, message: impl Into<String>) -> Self {
        CommandError::Usage { command, message: message.into() }
    }
}

/// Attach a command name to file system results.
pub trait FsResultExt<T> {
    fn for_command(self, command: &'static str) -> Result<T, CommandError>;
}

impl<T> FsResultExt<T> for Result<T, FsError> {
    fn for_command(self, command: &'static str) -> Result<T, CommandError> {
        self.map_err(|e| CommandError::from_fs(command, e))
    }
}

/// Per-session facts the built-ins report on.
#[derive(Debug, Clone)]
pub struct SessionEnv {
    pub user: String,
    pub hostname: String,
    pub started_at: DateTime<Local>,
}

impl Default for SessionEnv {
    fn default() -> Self {
        Self {
            user: "user".to_string(),
            hostname: "linux".to_string(),
            started_at: Local::now(),
        }
    }
}

/// Execution context handed to a built-in
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    /// Output of the previous pipeline stage, if any.
    pub stdin: Option<String>,
    pub fs: &'a mut VirtualFileSystem,
    pub env: &'a SessionEnv,
    pub history: &'a [String],
}

impl<'a> CommandContext<'a> {
    /// Piped input. An empty upstream result still counts as piped.
    pub fn piped(&self) -> Option<&str> {
        self.stdin.as_deref()
    }

    /// Positional operands (arguments not starting with `-`).
    pub fn operands(&self) -> Vec<String> {
        self.args.iter().filter(|a| !a.starts_with('-')).cloned().collect()
    }

    /// Short-flag letters present in any `-xyz` argument.
    pub fn has_flag(&self, flag: char) -> bool {
        self.args
            .iter()
            .filter(|a| a.starts_with('-') && !a.starts_with("--") && a.len() > 1)
            .any(|a| a[1..].contains(flag))
    }
}

/// A built-in command.
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError>;
}
