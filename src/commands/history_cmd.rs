// src/commands/history_cmd.rs
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let history = ctx.history;
        let count = ctx
            .args
            .first()
            .and_then(|a| a.parse::<usize>().ok())
            .unwrap_or(history.len())
            .min(history.len());
        let start = history.len() - count;

        let lines: Vec<String> = history[start..]
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{:>4} {}", start + i + 1, cmd))
            .collect();
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Harness;

    #[test]
    fn test_history_numbers_entries() {
        let mut h = Harness::new();
        h.history = vec!["ls".to_string(), "cd /tmp".to_string(), "history".to_string()];
        assert_eq!(h.text(&HistoryCommand, &[]), "   1 ls\n   2 cd /tmp\n   3 history");
    }

    #[test]
    fn test_history_last_n() {
        let mut h = Harness::new();
        h.history = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(h.text(&HistoryCommand, &["2"]), "   2 b\n   3 c");
        assert_eq!(h.text(&HistoryCommand, &["99"]).lines().count(), 3);
    }
}
