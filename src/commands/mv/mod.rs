// src/commands/mv/mod.rs
use crate::commands::cp::{landing_path, source_and_dest};
use crate::commands::{Command, CommandContext, CommandError, CommandOutput, FsResultExt};

pub struct MvCommand;

impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let (source, dest) = source_and_dest(ctx, "mv")?;
        let target = landing_path(ctx.fs, &source, &dest);
        ctx.fs.move_node(&source, &target).for_command("mv")?;
        Ok(CommandOutput::Text(format!("'{}' moved to '{}'", source, target)))
    }
}
