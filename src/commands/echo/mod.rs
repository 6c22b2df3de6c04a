// src/commands/echo/mod.rs
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};

pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::Text(ctx.args.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Harness;

    #[test]
    fn test_echo_joins_arguments() {
        let mut h = Harness::new();
        assert_eq!(h.text(&EchoCommand, &["hello", "big world"]), "hello big world");
        assert_eq!(h.text(&EchoCommand, &[]), "");
    }

    #[test]
    fn test_echo_ignores_piped_input() {
        let mut h = Harness::new();
        let out = h.run_piped(&EchoCommand, &["x"], "ignored").unwrap();
        assert_eq!(out.into_text(), "x");
    }
}
