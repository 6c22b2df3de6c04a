// src/commands/sort/mod.rs
use std::cmp::Ordering;

use crate::commands::utils::{read_input, split_lines};
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};

pub struct SortCommand;

#[derive(Debug, Default, Clone, Copy)]
struct SortOptions {
    reverse: bool,
    numeric: bool,
    unique: bool,
}

/// Leading number of a line, for `-n`. Lines without one sort as zero.
fn leading_number(line: &str) -> f64 {
    let trimmed = line.trim_start();
    let end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*i == 0 && *c == '-')))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().unwrap_or(0.0)
}

fn sort_lines<'a>(mut lines: Vec<&'a str>, opts: SortOptions) -> Vec<&'a str> {
    if opts.numeric {
        lines.sort_by(|a, b| {
            leading_number(a)
                .partial_cmp(&leading_number(b))
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.cmp(b))
        });
    } else {
        lines.sort();
    }
    if opts.reverse {
        lines.reverse();
    }
    if opts.unique {
        lines.dedup();
    }
    lines
}

impl Command for SortCommand {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let opts = SortOptions {
            reverse: ctx.has_flag('r'),
            numeric: ctx.has_flag('n'),
            unique: ctx.has_flag('u'),
        };
        let file = ctx.operands().into_iter().next();
        let input = read_input(ctx, "sort", file.as_deref())?;
        Ok(CommandOutput::Text(sort_lines(split_lines(&input), opts).join("\n")))
    }
}
