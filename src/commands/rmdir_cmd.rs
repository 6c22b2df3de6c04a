// src/commands/rmdir_cmd.rs
use crate::commands::utils::for_each_operand;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput, FsResultExt};

pub struct RmdirCommand;

impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let dirs = ctx.operands();
        let fs = &mut *ctx.fs;
        for_each_operand("rmdir", &dirs, |dir| {
            let node = fs
                .get_node(dir)
                .ok_or_else(|| CommandError::NotFound { command: "rmdir", path: dir.to_string() })?;
            let children = node.children().ok_or_else(|| CommandError::NotADirectory {
                command: "rmdir",
                path: dir.to_string(),
            })?;
            if !children.is_empty() {
                return Err(CommandError::NonEmptyDirectory { command: "rmdir", path: dir.to_string() });
            }
            fs.remove_node(dir).for_command("rmdir")?;
            Ok(Some(format!("removed directory '{}'", dir)))
        })
    }
}
