// src/commands/clear_cmd.rs
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::ClearScreen)
    }
}
