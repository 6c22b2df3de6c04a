// src/commands/help_cmd.rs
use crate::commands::registry::CommandName;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};

pub struct HelpCommand;

const HELP_FOOTER: &str = "\
Pipes and redirection:
  cmd1 | cmd2                  feed the output of cmd1 to cmd2
  cmd > file                   write the output of cmd to file
  Example: ls -l | grep txt | sort";

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let mut out = String::from("Available commands:\n\n");
        for name in CommandName::ALL {
            out.push_str("  ");
            out.push_str(name.summary());
            out.push('\n');
        }
        out.push('\n');
        out.push_str(HELP_FOOTER);
        Ok(CommandOutput::Text(out))
    }
}

pub struct ManCommand;

/// Extra sections for commands whose one-line summary undersells them.
fn extra_sections(name: CommandName) -> Option<&'static str> {
    match name {
        CommandName::Ls => Some(
            "OPTIONS\n    -l  use a long listing format\n    -a  do not ignore entries starting with .\n    -h  print sizes in human readable form",
        ),
        CommandName::Rm => Some(
            "OPTIONS\n    -r, -R  remove directories and their contents recursively\n    -f      ignore nonexistent files, never fail",
        ),
        CommandName::Grep => Some(
            "DESCRIPTION\n    Search for PATTERN (case-insensitive) in each FILE or in piped input.\n\nOPTIONS\n    -v  select non-matching lines\n    -n  prefix each line with its line number",
        ),
        CommandName::Nano => Some(
            "DESCRIPTION\n    Opens FILE in the editor. Saving writes the buffer back to the file,\n    creating it if needed.",
        ),
        CommandName::ExportFs => Some(
            "DESCRIPTION\n    Exports the whole virtual file system to a JSON file that can be kept\n    and imported later.",
        ),
        CommandName::ImportFs => Some(
            "DESCRIPTION\n    Imports a previously exported JSON file. The current file system is\n    replaced completely.",
        ),
        CommandName::Exit => Some(
            "DESCRIPTION\n    Saves the file system as a JSON backup and ends the session.",
        ),
        _ => None,
    }
}

fn manual_page(name: CommandName) -> String {
    let summary = name.summary();
    let (synopsis, description) = summary.split_once("  ").unwrap_or((summary, ""));
    let mut page = format!(
        "{}(1)\n\nNAME\n    {} - {}\n\nSYNOPSIS\n    {}",
        name.as_str().to_uppercase(),
        name.as_str(),
        description.trim(),
        synopsis.trim()
    );
    if let Some(extra) = extra_sections(name) {
        page.push_str("\n\n");
        page.push_str(extra);
    }
    page
}

impl Command for ManCommand {
    fn name(&self) -> &'static str {
        "man"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let topic = ctx
            .operands()
            .into_iter()
            .next()
            .ok_or_else(|| CommandError::usage("man", "what manual page do you want?"))?;
        match topic.parse::<CommandName>() {
            Ok(name) => Ok(CommandOutput::Text(manual_page(name))),
            Err(_) => Err(CommandError::usage("man", format!("no manual entry for {}", topic))),
        }
    }
}
