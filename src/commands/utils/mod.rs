// src/commands/utils/mod.rs
pub mod head_tail;

use crate::commands::{CommandContext, CommandError, CommandOutput, FsResultExt};

/// Input for a text filter: piped input wins, otherwise the named file.
pub fn read_input(
    ctx: &CommandContext<'_>,
    command: &'static str,
    file: Option<&str>,
) -> Result<String, CommandError> {
    if let Some(piped) = ctx.piped() {
        return Ok(piped.to_string());
    }
    let file = file.ok_or(CommandError::MissingOperand { command })?;
    ctx.fs.get_file_content(file).map(str::to_string).for_command(command)
}

/// Run `op` for every operand, collecting one output line per operand
/// instead of stopping at the first failure.
///
/// `Ok(None)` suppresses the line (used by `rm -f`). A lone operand that
/// fails surfaces as the command's error.
pub fn for_each_operand<F>(
    command: &'static str,
    operands: &[String],
    mut op: F,
) -> Result<CommandOutput, CommandError>
where
    F: FnMut(&str) -> Result<Option<String>, CommandError>,
{
    if operands.is_empty() {
        return Err(CommandError::MissingOperand { command });
    }
    if let [only] = operands {
        return op(only).map(|line| CommandOutput::Text(line.unwrap_or_default()));
    }

    let mut lines = Vec::new();
    for operand in operands {
        match op(operand) {
            Ok(Some(line)) => lines.push(line),
            Ok(None) => {}
            Err(e) => lines.push(e.to_string()),
        }
    }
    Ok(CommandOutput::Text(lines.join("\n")))
}

/// Final path segment, as `basename` prints it.
pub fn basename(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}

/// Split into lines, ignoring a single trailing newline.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}
