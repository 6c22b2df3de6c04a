// src/commands/ls/mod.rs
use chrono::Local;

use crate::commands::{Command, CommandContext, CommandError, CommandOutput, FsResultExt};
use crate::fs::Node;

pub struct LsCommand;

fn format_size(size: u64, human_readable: bool) -> String {
    if !human_readable || size < 1024 {
        return size.to_string();
    }
    let mut value = size as f64;
    let mut unit = "B";
    for u in ["K", "M", "G"] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = u;
    }
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}{}", rounded as u64, unit)
    } else {
        format!("{:.1}{}", rounded, unit)
    }
}

fn format_long(node: &Node, human_readable: bool) -> String {
    let date = node.modified.with_timezone(&Local).format("%b %e %H:%M");
    format!(
        "{} 1 {} {} {:>8} {} {}",
        node.permissions,
        node.owner,
        node.group,
        format_size(node.size(), human_readable),
        date,
        node.name
    )
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let long = ctx.has_flag('l');
        let all = ctx.has_flag('a');
        let human = ctx.has_flag('h');
        let target = ctx.operands().into_iter().next();

        let entries: Vec<&Node> = ctx
            .fs
            .list_directory(target.as_deref())
            .for_command("ls")?
            .into_iter()
            .filter(|n| all || !n.name.starts_with('.'))
            .collect();

        if long {
            let mut lines = vec![format!("total {}", entries.len())];
            lines.extend(entries.iter().map(|n| format_long(n, human)));
            return Ok(CommandOutput::Text(lines.join("\n")));
        }

        let names: Vec<&str> = entries.iter().map(|n| n.name.as_str()).collect();
        Ok(CommandOutput::Text(names.join("  ")))
    }
}
