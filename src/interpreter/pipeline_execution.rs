//! Pipeline Execution
//!
//! Parses a command line into either a pipeline (`cmd1 | cmd2 | cmd3`) or a
//! single redirected command (`cmd > file`) and runs it against the file
//! system. Stages run strictly one after another; each stage receives the
//! previous stage's text as piped input.

use crate::commands::{lookup, CommandContext, CommandError, CommandOutput, SessionEnv};
use crate::fs::VirtualFileSystem;
use crate::interpreter::tokenizer::tokenize;

/// Separator that turns a line into a redirected command.
pub const REDIRECT_OPERATOR: &str = " > ";

/// Tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Pipeline(Vec<Vec<String>>),
    Redirect { command: Vec<String>, target: String },
}

pub fn parse_line(line: &str) -> Result<ParsedLine, CommandError> {
    if let Some((command_part, target_part)) = line.split_once(REDIRECT_OPERATOR) {
        if command_part.contains('|') {
            return Err(CommandError::SyntaxError(
                "pipes cannot be combined with redirection".to_string(),
            ));
        }
        let command = tokenize(command_part);
        if command.is_empty() {
            return Err(CommandError::SyntaxError("missing command before '>'".to_string()));
        }
        // The target is the rest of the line, spaces included.
        let target = unquote(target_part.trim());
        if target.is_empty() {
            return Err(CommandError::SyntaxError("missing file after '>'".to_string()));
        }
        if target_part.contains(REDIRECT_OPERATOR) {
            return Err(CommandError::SyntaxError(
                "only one redirection is allowed".to_string(),
            ));
        }
        return Ok(ParsedLine::Redirect { command, target: target.to_string() });
    }

    let stages = line
        .split('|')
        .map(|stage| {
            let words = tokenize(stage.trim());
            if words.is_empty() {
                Err(CommandError::SyntaxError("empty pipeline stage".to_string()))
            } else {
                Ok(words)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParsedLine::Pipeline(stages))
}

/// Strip one pair of matching quotes around the whole text.
fn unquote(text: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = text.strip_prefix(quote).and_then(|t| t.strip_suffix(quote)) {
            return inner;
        }
    }
    text
}

/// Borrowed session state every stage runs against.
pub struct Session<'a> {
    pub fs: &'a mut VirtualFileSystem,
    pub env: &'a SessionEnv,
    pub history: &'a [String],
}

impl<'a> Session<'a> {
    fn run_stage(&mut self, words: &[String], stdin: Option<String>) -> Result<CommandOutput, CommandError> {
        let (name, args) = words
            .split_first()
            .ok_or_else(|| CommandError::SyntaxError("empty command".to_string()))?;
        let handler = lookup(name)?;
        tracing::debug!(command = %name, args = ?args, piped = stdin.is_some(), "running stage");
        let mut ctx = CommandContext {
            args: args.to_vec(),
            stdin,
            fs: &mut *self.fs,
            env: self.env,
            history: self.history,
        };
        handler.execute(&mut ctx)
    }

    /// Run stages left to right, aborting at the first failure.
    pub fn run_pipeline(&mut self, stages: &[Vec<String>]) -> Result<CommandOutput, CommandError> {
        let mut output = CommandOutput::empty();
        let mut piped: Option<String> = None;
        for (i, words) in stages.iter().enumerate() {
            output = self.run_stage(words, piped.take())?;
            if i + 1 < stages.len() {
                piped = Some(output.into_text());
                output = CommandOutput::empty();
            }
        }
        Ok(output)
    }

    /// Run one command and write its text into `target`, replacing any
    /// existing file.
    pub fn run_redirect(&mut self, command: &[String], target: &str) -> Result<CommandOutput, CommandError> {
        let output = self
            .run_stage(command, None)
            .map_err(|e| CommandError::RedirectionFailed(e.to_string()))?;
        self.fs
            .create_file(target, &output.into_text())
            .map_err(|e| CommandError::RedirectionFailed(e.to_string()))?;
        Ok(CommandOutput::Text(format!("Output written to '{}'", target)))
    }

    pub fn run_line(&mut self, parsed: &ParsedLine) -> Result<CommandOutput, CommandError> {
        match parsed {
            ParsedLine::Pipeline(stages) => self.run_pipeline(stages),
            ParsedLine::Redirect { command, target } => self.run_redirect(command, target),
        }
    }
}
