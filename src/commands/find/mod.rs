// src/commands/find/mod.rs
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};

pub struct FindCommand;

#[derive(Debug, PartialEq, Eq)]
struct FindArgs {
    name: Option<String>,
    path: Option<String>,
}

/// `-name <pattern>` may appear anywhere; the first other non-flag
/// argument is the starting directory.
fn parse_find_args(args: &[String]) -> FindArgs {
    let name_at = args.iter().position(|a| a == "-name").map(|i| i + 1);
    let name = name_at
        .and_then(|i| args.get(i))
        .map(|n| n.replace(['\'', '"'], ""));
    let path = args
        .iter()
        .enumerate()
        .find(|(i, a)| Some(*i) != name_at && !a.starts_with('-'))
        .map(|(_, a)| a.clone());
    FindArgs { name, path }
}

impl Command for FindCommand {
    fn name(&self) -> &'static str {
        "find"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let FindArgs { name, path } = parse_find_args(&ctx.args);
        let name = name.ok_or_else(|| CommandError::usage("find", "unsupported options (use -name <pattern>)"))?;
        let path = path.unwrap_or_else(|| ctx.fs.current_path().to_string());
        if ctx.fs.get_node(&path).is_none() {
            return Err(CommandError::NotFound { command: "find", path });
        }
        Ok(CommandOutput::Text(ctx.fs.find_files(&name, &path).join("\n")))
    }
}
