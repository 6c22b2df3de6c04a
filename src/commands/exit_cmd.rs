// src/commands/exit_cmd.rs
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};

/// Name under which the host saves the backup taken on exit.
pub const BACKUP_FILE_NAME: &str = "linux-filesystem-backup.json";

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::Exit { backup: ctx.fs.export_snapshot() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Harness;

    #[test]
    fn test_exit_carries_backup() {
        let mut h = Harness::with_files(&[("/tmp/keep", "1")]);
        let CommandOutput::Exit { backup } = h.run(&ExitCommand, &[]).unwrap() else {
            panic!("expected exit");
        };
        assert!(backup.contains("\"keep\""));
    }
}
