// src/commands/touch/mod.rs
use crate::commands::utils::for_each_operand;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput, FsResultExt};

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let files = ctx.operands();
        let fs = &mut *ctx.fs;
        for_each_operand("touch", &files, |file| {
            match fs.get_node(file) {
                // Existing files keep their content; only the timestamp moves.
                Some(node) if node.is_file() => {
                    let content = node.content().unwrap_or_default().to_string();
                    fs.write_file(file, &content).for_command("touch")?;
                    Ok(None)
                }
                Some(_) => Ok(None),
                None => {
                    fs.create_file(file, "").for_command("touch")?;
                    Ok(Some(format!("touch: created file '{}'", file)))
                }
            }
        })
    }
}
