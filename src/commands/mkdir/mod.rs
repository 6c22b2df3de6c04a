// src/commands/mkdir/mod.rs
use crate::commands::utils::for_each_operand;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput, FsResultExt};

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let dirs = ctx.operands();
        let fs = &mut *ctx.fs;
        for_each_operand("mkdir", &dirs, |dir| {
            fs.create_directory(dir).for_command("mkdir")?;
            Ok(Some(format!("mkdir: created directory '{}'", dir)))
        })
    }
}
