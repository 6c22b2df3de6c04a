//! simsh - a simulated POSIX-like shell over an in-memory file system
//!
//! The file system is a tree of directories and text files that is written
//! through to a key-value store after every change. The interpreter runs
//! pipelines of built-in commands (`cat notes.md | grep todo | sort`) and
//! single-command redirections (`echo hi > /tmp/x.txt`) against it.

pub mod commands;
pub mod config;
pub mod fs;
pub mod interpreter;
pub mod shell;

pub use commands::{CommandError, CommandName, CommandOutput, SessionEnv};
pub use config::{ConfigError, ShellOptions};
pub use fs::{FileStore, FsError, KeyValueStore, MemoryStore, Node, NodeKind, VirtualFileSystem};
pub use interpreter::{Completion, History, Interpreter, PipelineError};
pub use shell::{FileSelector, PromptHook, SharedShell, Shell};
