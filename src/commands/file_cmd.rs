// src/commands/file_cmd.rs
use crate::commands::utils::for_each_operand;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};
use crate::fs::{Node, NodeKind};

pub struct FileCommand;

fn describe(node: &Node) -> &'static str {
    match &node.kind {
        NodeKind::Directory { .. } => "directory",
        NodeKind::File { content } if content.is_empty() => "empty",
        NodeKind::File { content } if content.contains("#!/bin/bash") => "Bourne-Again shell script, ASCII text executable",
        NodeKind::File { content } if content.to_lowercase().contains("<html") => "HTML document, ASCII text",
        NodeKind::File { content } if content.is_ascii() => "ASCII text",
        NodeKind::File { .. } => "UTF-8 Unicode text",
    }
}

impl Command for FileCommand {
    fn name(&self) -> &'static str {
        "file"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let brief = ctx.has_flag('b');
        let fs = &*ctx.fs;
        for_each_operand("file", &ctx.operands(), |path| {
            let node = fs
                .get_node(path)
                .ok_or_else(|| CommandError::NotFound { command: "file", path: path.to_string() })?;
            Ok(Some(if brief {
                describe(node).to_string()
            } else {
                format!("{}: {}", path, describe(node))
            }))
        })
    }
}
