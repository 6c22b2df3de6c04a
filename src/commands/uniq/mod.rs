// src/commands/uniq/mod.rs
use crate::commands::utils::{read_input, split_lines};
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};

pub struct UniqCommand;

/// Collapse runs of equal adjacent lines, keeping each run's length.
fn collapse<'a>(lines: &[&'a str]) -> Vec<(usize, &'a str)> {
    let mut runs: Vec<(usize, &str)> = Vec::new();
    for line in lines {
        match runs.last_mut() {
            Some((n, prev)) if prev == line => *n += 1,
            _ => runs.push((1, *line)),
        }
    }
    runs
}

impl Command for UniqCommand {
    fn name(&self) -> &'static str {
        "uniq"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let show_counts = ctx.has_flag('c');
        let file = ctx.operands().into_iter().next();
        let input = read_input(ctx, "uniq", file.as_deref())?;
        let out: Vec<String> = collapse(&split_lines(&input))
            .into_iter()
            .map(|(n, line)| if show_counts { format!("{:>7} {}", n, line) } else { line.to_string() })
            .collect();
        Ok(CommandOutput::Text(out.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Harness;

    #[test]
    fn test_uniq_adjacent_only() {
        let mut h = Harness::with_files(&[("/tmp/u", "a\na\nb\na")]);
        assert_eq!(h.text(&UniqCommand, &["/tmp/u"]), "a\nb\na");
    }

    #[test]
    fn test_uniq_counts() {
        let mut h = Harness::new();
        let out = h.run_piped(&UniqCommand, &["-c"], "x\nx\ny").unwrap();
        assert_eq!(out.into_text(), "      2 x\n      1 y");
    }

    #[test]
    fn test_uniq_missing_operand() {
        let mut h = Harness::new();
        assert_eq!(h.run(&UniqCommand, &[]).unwrap_err(), CommandError::MissingOperand { command: "uniq" });
    }
}
