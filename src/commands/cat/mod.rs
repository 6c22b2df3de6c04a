// src/commands/cat/mod.rs
use crate::commands::utils::for_each_operand;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput, FsResultExt};

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        if let Some(piped) = ctx.piped() {
            return Ok(CommandOutput::text(piped));
        }
        let files = ctx.operands();
        let fs = &*ctx.fs;
        for_each_operand("cat", &files, |file| {
            let content = fs.get_file_content(file).for_command("cat")?;
            Ok(Some(content.to_string()))
        })
    }
}
