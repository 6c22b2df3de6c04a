// src/commands/du_cmd.rs
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};
use crate::fs::{Node, NodeKind};

pub struct DuCommand;

/// Kilobytes charged to a directory entry itself.
const DIRECTORY_KB: u64 = 4;

/// Disk usage estimate in 1K blocks: files round up to whole kilobytes,
/// directories cost one block group plus their contents.
fn usage_kb(node: &Node) -> u64 {
    match &node.kind {
        NodeKind::File { .. } => node.size().div_ceil(1024),
        NodeKind::Directory { children } => {
            DIRECTORY_KB + children.values().map(usage_kb).sum::<u64>()
        }
    }
}

impl Command for DuCommand {
    fn name(&self) -> &'static str {
        "du"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let path = ctx
            .operands()
            .into_iter()
            .next()
            .unwrap_or_else(|| ".".to_string());
        let node = ctx
            .fs
            .get_node(&path)
            .ok_or_else(|| CommandError::NotFound { command: "du", path: path.clone() })?;
        Ok(CommandOutput::Text(format!("{}\t{}", usage_kb(node), path)))
    }
}
