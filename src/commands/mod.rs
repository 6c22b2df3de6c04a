// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod cp;
pub mod du_cmd;
pub mod echo;
pub mod exit_cmd;
pub mod file_cmd;
pub mod find;
pub mod fs_admin_cmd;
pub mod grep;
pub mod head;
pub mod help_cmd;
pub mod history_cmd;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod nano_cmd;
pub mod pwd;
pub mod registry;
pub mod rm;
pub mod rmdir_cmd;
pub mod sort;
pub mod sysinfo_cmd;
pub mod tail;
pub mod touch;
pub mod types;
pub mod uniq;
pub mod utils;
pub mod wc;
pub mod which_cmd;

#[cfg(test)]
mod test_support;

pub use registry::{lookup, names_with_prefix, CommandName};
pub use types::{Command, CommandContext, CommandError, CommandOutput, FsResultExt, SessionEnv};
