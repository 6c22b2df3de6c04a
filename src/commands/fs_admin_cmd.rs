// src/commands/fs_admin_cmd.rs
//! File system administration: reset-fs, debug-fs, export-fs, import-fs.

use chrono::Local;

use crate::commands::{Command, CommandContext, CommandError, CommandOutput};

pub const RESET_MESSAGE: &str = "File system reset to its initial state. All changes were discarded.";

/// File name offered for an export made on `date`.
pub fn export_file_name(date: chrono::NaiveDate) -> String {
    format!("linux-filesystem-{}.json", date.format("%Y-%m-%d"))
}

pub struct ResetFsCommand;

impl Command for ResetFsCommand {
    fn name(&self) -> &'static str {
        "reset-fs"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        ctx.fs.reset();
        Ok(CommandOutput::text(RESET_MESSAGE))
    }
}

pub struct DebugFsCommand;

impl Command for DebugFsCommand {
    fn name(&self) -> &'static str {
        "debug-fs"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let text = match ctx.fs.stored_summary() {
            Some(info) => format!(
                "File system saved at: {}\nCurrent directory: {}",
                info.timestamp
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "unknown".to_string()),
                info.current_path
            ),
            None => "No saved file system found.".to_string(),
        };
        Ok(CommandOutput::Text(text))
    }
}

pub struct ExportFsCommand;

impl Command for ExportFsCommand {
    fn name(&self) -> &'static str {
        "export-fs"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::Export {
            file_name: export_file_name(Local::now().date_naive()),
            json: ctx.fs.export_snapshot(),
        })
    }
}

/// Asks the host to pick a snapshot file; the shell applies it once the
/// selection arrives.
pub struct ImportFsCommand;

impl Command for ImportFsCommand {
    fn name(&self) -> &'static str {
        "import-fs"
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::Import)
    }
}
