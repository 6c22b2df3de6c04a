// src/commands/utils/head_tail.rs
use crate::commands::utils::{read_input, split_lines};
use crate::commands::{CommandContext, CommandError, CommandOutput};

pub const DEFAULT_LINES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTailOptions {
    pub lines: usize,
    pub file: Option<String>,
}

/// The line count comes from any argument that parses as an integer
/// (`5`, `-5`, or the value after `-n`). A file whose name is numeric is
/// therefore read as a count.
pub fn parse_head_tail_args(args: &[String]) -> HeadTailOptions {
    let lines = args
        .iter()
        .find_map(|a| a.parse::<i64>().ok())
        .map(|n| n.unsigned_abs() as usize)
        .unwrap_or(DEFAULT_LINES);
    let file = args
        .iter()
        .find(|a| !a.starts_with('-') && a.parse::<i64>().is_err())
        .cloned();
    HeadTailOptions { lines, file }
}

pub fn run_head_tail<F>(
    ctx: &CommandContext<'_>,
    cmd_name: &'static str,
    select: F,
) -> Result<CommandOutput, CommandError>
where
    F: Fn(&[&str], usize) -> String,
{
    let opts = parse_head_tail_args(&ctx.args);
    let input = read_input(ctx, cmd_name, opts.file.as_deref())?;
    Ok(CommandOutput::Text(select(&split_lines(&input), opts.lines)))
}

pub fn get_head(lines: &[&str], count: usize) -> String {
    lines.iter().take(count).copied().collect::<Vec<_>>().join("\n")
}

pub fn get_tail(lines: &[&str], count: usize) -> String {
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let opts = parse_head_tail_args(&args(&["file.txt"]));
        assert_eq!(opts, HeadTailOptions { lines: 10, file: Some("file.txt".to_string()) });
    }

    #[test]
    fn test_parse_count_forms() {
        assert_eq!(parse_head_tail_args(&args(&["3", "f"])).lines, 3);
        assert_eq!(parse_head_tail_args(&args(&["-4", "f"])).lines, 4);
        assert_eq!(parse_head_tail_args(&args(&["-n", "2", "f"])).lines, 2);
        assert_eq!(parse_head_tail_args(&args(&["-n", "2", "f"])).file.as_deref(), Some("f"));
    }

    #[test]
    fn test_numeric_filename_is_taken_as_count() {
        let opts = parse_head_tail_args(&args(&["2024"]));
        assert_eq!(opts.lines, 2024);
        assert_eq!(opts.file, None);
    }

    #[test]
    fn test_get_head_and_tail() {
        let lines = vec!["1", "2", "3", "4"];
        assert_eq!(get_head(&lines, 2), "1\n2");
        assert_eq!(get_head(&lines, 10), "1\n2\n3\n4");
        assert_eq!(get_tail(&lines, 2), "3\n4");
        assert_eq!(get_tail(&lines, 0), "");
    }
}
