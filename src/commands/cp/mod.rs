// src/commands/cp/mod.rs
use crate::commands::utils::basename;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput, FsResultExt};
use crate::fs::VirtualFileSystem;

pub struct CpCommand;

/// Where a copy or move of `source` onto `dest` lands: inside `dest` when it
/// is an existing directory, otherwise `dest` itself.
pub(crate) fn landing_path(fs: &VirtualFileSystem, source: &str, dest: &str) -> String {
    match fs.get_node(dest) {
        Some(node) if node.is_directory() => {
            format!("{}/{}", dest.trim_end_matches('/'), basename(source))
        }
        _ => dest.to_string(),
    }
}

/// Exactly two operands, or a missing-operand error.
pub(crate) fn source_and_dest(
    ctx: &CommandContext<'_>,
    command: &'static str,
) -> Result<(String, String), CommandError> {
    match ctx.operands().as_slice() {
        [source, dest] => Ok((source.clone(), dest.clone())),
        _ => Err(CommandError::MissingOperand { command }),
    }
}

impl Command for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let (source, dest) = source_and_dest(ctx, "cp")?;
        let content = ctx.fs.get_file_content(&source).for_command("cp")?.to_string();
        let target = landing_path(ctx.fs, &source, &dest);
        ctx.fs.create_file(&target, &content).for_command("cp")?;
        Ok(CommandOutput::Text(format!("'{}' copied to '{}'", source, target)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Harness;

    #[test]
    fn test_cp_file() {
        let mut h = Harness::with_files(&[("/tmp/a.txt", "data")]);
        let out = h.text(&CpCommand, &["/tmp/a.txt", "/tmp/b.txt"]);
        assert_eq!(out, "'/tmp/a.txt' copied to '/tmp/b.txt'");
        assert_eq!(h.fs.get_file_content("/tmp/b.txt").unwrap(), "data");
        assert_eq!(h.fs.get_file_content("/tmp/a.txt").unwrap(), "data");
    }

    #[test]
    fn test_cp_into_directory() {
        let mut h = Harness::with_files(&[("/tmp/a.txt", "data")]);
        h.fs.create_directory("/tmp/dir").unwrap();
        let out = h.text(&CpCommand, &["/tmp/a.txt", "/tmp/dir/"]);
        assert_eq!(out, "'/tmp/a.txt' copied to '/tmp/dir/a.txt'");
        assert_eq!(h.fs.get_file_content("/tmp/dir/a.txt").unwrap(), "data");
    }

    #[test]
    fn test_cp_directory_source_rejected() {
        let mut h = Harness::new();
        let err = h.run(&CpCommand, &["/tmp", "/copy"]).unwrap_err();
        assert_eq!(err, CommandError::NotAFile { command: "cp", path: "/tmp".to_string() });
    }

    #[test]
    fn test_cp_operand_count() {
        let mut h = Harness::with_files(&[("/tmp/a", "")]);
        assert_eq!(h.run(&CpCommand, &["/tmp/a"]).unwrap_err(), CommandError::MissingOperand { command: "cp" });
        assert!(h.run(&CpCommand, &[]).is_err());
    }
}
