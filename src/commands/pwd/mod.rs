// src/commands/pwd/mod.rs
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::text(ctx.fs.current_path()))
    }
}
