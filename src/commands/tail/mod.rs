// src/commands/tail/mod.rs
use crate::commands::utils::head_tail::{get_tail, run_head_tail};
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};

pub struct TailCommand;

impl Command for TailCommand {
    fn name(&self) -> &'static str {
        "tail"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        run_head_tail(ctx, "tail", get_tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Harness;

    #[test]
    fn test_tail_default_ten() {
        let text: Vec<String> = (1..=15).map(|i| i.to_string()).collect();
        let mut h = Harness::with_files(&[("/tmp/n", text.join("\n").as_str())]);
        assert_eq!(h.text(&TailCommand, &["/tmp/n"]), text[5..].join("\n"));
    }

    #[test]
    fn test_tail_piped_with_count() {
        let mut h = Harness::new();
        let out = h.run_piped(&TailCommand, &["-2"], "a\nb\nc").unwrap();
        assert_eq!(out.into_text(), "b\nc");
    }

    #[test]
    fn test_tail_more_than_available() {
        let mut h = Harness::with_files(&[("/tmp/s", "only")]);
        assert_eq!(h.text(&TailCommand, &["50", "/tmp/s"]), "only");
    }
}
