// src/commands/nano_cmd.rs
use crate::commands::{Command, CommandContext, CommandError, CommandOutput, FsResultExt};

pub struct NanoCommand;

impl Command for NanoCommand {
    fn name(&self) -> &'static str {
        "nano"
    }

    /// Hands the host an editor session on the file. A file that does not
    /// exist yet opens empty and is created on save.
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let file = ctx
            .operands()
            .into_iter()
            .next()
            .ok_or(CommandError::MissingOperand { command: "nano" })?;
        let content = match ctx.fs.get_node(&file) {
            None => String::new(),
            Some(_) => ctx.fs.get_file_content(&file).for_command("nano")?.to_string(),
        };
        Ok(CommandOutput::OpenEditor { path: ctx.fs.resolve_path(&file), content })
    }
}
