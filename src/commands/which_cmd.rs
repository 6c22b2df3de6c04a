// src/commands/which_cmd.rs
use crate::commands::registry::CommandName;
use crate::commands::utils::for_each_operand;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};

pub struct WhichCommand;

impl Command for WhichCommand {
    fn name(&self) -> &'static str {
        "which"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        for_each_operand("which", &ctx.operands(), |name| {
            Ok(Some(match name.parse::<CommandName>() {
                Ok(_) => format!("/bin/{}", name),
                Err(_) => format!("{}: not found", name),
            }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Harness;

    #[test]
    fn test_which_builtin_and_unknown() {
        let mut h = Harness::new();
        assert_eq!(h.text(&WhichCommand, &["grep"]), "/bin/grep");
        assert_eq!(h.text(&WhichCommand, &["vim"]), "vim: not found");
        assert_eq!(h.text(&WhichCommand, &["ls", "reset-fs"]), "/bin/ls\n/bin/reset-fs");
    }

    #[test]
    fn test_which_missing_operand() {
        let mut h = Harness::new();
        assert_eq!(h.run(&WhichCommand, &[]).unwrap_err(), CommandError::MissingOperand { command: "which" });
    }
}
