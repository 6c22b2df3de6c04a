// src/commands/wc/mod.rs
use crate::commands::utils::read_input;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};

pub struct WcCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Counts {
    lines: usize,
    words: usize,
    chars: usize,
}

fn count(text: &str) -> Counts {
    Counts {
        lines: text.lines().count(),
        words: text.split_whitespace().count(),
        chars: text.chars().count(),
    }
}

impl Command for WcCommand {
    fn name(&self) -> &'static str {
        "wc"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let file = ctx.operands().into_iter().next();
        let input = read_input(ctx, "wc", file.as_deref())?;
        let counts = count(&input);

        // -l / -w / -c pick columns; none picks all three
        let picked: Vec<usize> = [('l', counts.lines), ('w', counts.words), ('c', counts.chars)]
            .into_iter()
            .filter(|(flag, _)| ctx.has_flag(*flag))
            .map(|(_, n)| n)
            .collect();
        let columns = if picked.is_empty() {
            vec![counts.lines, counts.words, counts.chars]
        } else {
            picked
        };

        let mut out: Vec<String> = columns.iter().map(|n| format!("{:>8}", n)).collect();
        if ctx.piped().is_none() {
            out.extend(file);
        }
        Ok(CommandOutput::Text(out.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Harness;

    #[test]
    fn test_count() {
        assert_eq!(count("one two\nthree\n"), Counts { lines: 2, words: 3, chars: 14 });
        assert_eq!(count(""), Counts { lines: 0, words: 0, chars: 0 });
    }

    #[test]
    fn test_wc_file() {
        let mut h = Harness::with_files(&[("/tmp/t", "a b\nc")]);
        assert_eq!(h.text(&WcCommand, &["/tmp/t"]), "       2        3        5 /tmp/t");
    }

    #[test]
    fn test_wc_piped_lines_only() {
        let mut h = Harness::new();
        let out = h.run_piped(&WcCommand, &["-l"], "x\ny\nz").unwrap();
        assert_eq!(out.into_text(), "       3");
    }

    #[test]
    fn test_wc_missing_operand() {
        let mut h = Harness::new();
        assert_eq!(h.run(&WcCommand, &[]).unwrap_err(), CommandError::MissingOperand { command: "wc" });
    }
}
