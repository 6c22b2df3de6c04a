// src/commands/rm/mod.rs
use crate::commands::utils::for_each_operand;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput, FsResultExt};

pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let recursive = ctx.has_flag('r') || ctx.has_flag('R');
        let force = ctx.has_flag('f');
        let paths = ctx.operands();

        if paths.is_empty() && force {
            return Ok(CommandOutput::empty());
        }

        let fs = &mut *ctx.fs;
        for_each_operand("rm", &paths, |path| {
            let result = match fs.get_node(path) {
                None => Err(CommandError::NotFound { command: "rm", path: path.to_string() }),
                Some(node) if node.is_directory() && !recursive => Err(CommandError::usage(
                    "rm",
                    format!("cannot remove '{}': Is a directory", path),
                )),
                Some(_) => fs.remove_node(path).for_command("rm"),
            };
            match result {
                Ok(()) => Ok(Some(format!("removed '{}'", path))),
                Err(_) if force => Ok(None),
                Err(e) => Err(e),
            }
        })
    }
}
