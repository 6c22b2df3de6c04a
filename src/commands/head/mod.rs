// src/commands/head/mod.rs
use crate::commands::utils::head_tail::{get_head, run_head_tail};
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};

pub struct HeadCommand;

impl Command for HeadCommand {
    fn name(&self) -> &'static str {
        "head"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        run_head_tail(ctx, "head", get_head)
    }
}
