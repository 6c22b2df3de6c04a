// src/commands/cd_cmd.rs
use crate::commands::{Command, CommandContext, CommandError, CommandOutput, FsResultExt};

pub struct CdCommand;

/// Expand a leading `~` to the home directory.
fn expand_home(path: &str, home: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => home.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{}{}", home, rest),
        _ => path.to_string(),
    }
}

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let home = ctx.fs.home().to_string();
        let target = match ctx.args.first() {
            Some(arg) => expand_home(arg, &home),
            None => home,
        };
        ctx.fs.change_directory(&target).for_command("cd")?;
        Ok(CommandOutput::empty())
    }
}
