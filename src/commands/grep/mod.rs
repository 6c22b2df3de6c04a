// src/commands/grep/mod.rs
use regex_lite::{Regex, RegexBuilder};

use crate::commands::{Command, CommandContext, CommandError, CommandOutput, FsResultExt};

pub struct GrepCommand;

/// Case-insensitive line matcher. A pattern that is not a valid regex is
/// matched as a literal substring instead.
enum Matcher {
    Regex(Regex),
    Literal(String),
}

impl Matcher {
    fn new(pattern: &str) -> Self {
        match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(re) => Matcher::Regex(re),
            Err(_) => Matcher::Literal(pattern.to_lowercase()),
        }
    }

    fn is_match(&self, line: &str) -> bool {
        match self {
            Matcher::Regex(re) => re.is_match(line),
            Matcher::Literal(needle) => line.to_lowercase().contains(needle.as_str()),
        }
    }
}

struct GrepOptions {
    invert: bool,
    line_numbers: bool,
}

impl GrepOptions {
    fn select(&self, matcher: &Matcher, text: &str) -> Vec<String> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| matcher.is_match(line) != self.invert)
            .map(|(i, line)| {
                if self.line_numbers {
                    format!("{}:{}", i + 1, line)
                } else {
                    line.to_string()
                }
            })
            .collect()
    }
}

impl Command for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutput, CommandError> {
        let opts = GrepOptions { invert: ctx.has_flag('v'), line_numbers: ctx.has_flag('n') };
        let operands = ctx.operands();
        let (pattern, files) = operands
            .split_first()
            .ok_or(CommandError::MissingOperand { command: "grep" })?;
        let matcher = Matcher::new(pattern);

        if let Some(piped) = ctx.piped() {
            return Ok(CommandOutput::Text(opts.select(&matcher, piped).join("\n")));
        }

        match files {
            [] => Err(CommandError::MissingOperand { command: "grep" }),
            [file] => {
                let content = ctx.fs.get_file_content(file).for_command("grep")?;
                Ok(CommandOutput::Text(opts.select(&matcher, content).join("\n")))
            }
            _ => {
                let mut out = Vec::new();
                for file in files {
                    match ctx.fs.get_file_content(file).for_command("grep") {
                        Ok(content) => out.extend(
                            opts.select(&matcher, content)
                                .into_iter()
                                .map(|line| format!("{}:{}", file, line)),
                        ),
                        Err(e) => out.push(e.to_string()),
                    }
                }
                Ok(CommandOutput::Text(out.join("\n")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Harness;

    #[test]
    fn test_grep_is_case_insensitive() {
        let mut h = Harness::with_files(&[("/tmp/t.txt", "say hello now\nnothing here")]);
        assert_eq!(h.text(&GrepCommand, &["HELLO", "/tmp/t.txt"]), "say hello now");
    }

    #[test]
    fn test_grep_regex() {
        let mut h = Harness::with_files(&[("/tmp/t.txt", "apple\nbanana\navocado")]);
        assert_eq!(h.text(&GrepCommand, &["^a", "/tmp/t.txt"]), "apple\navocado");
    }

    #[test]
    fn test_grep_invalid_regex_falls_back_to_literal() {
        let mut h = Harness::with_files(&[("/tmp/t.txt", "f(x) = 1\ng = 2")]);
        assert_eq!(h.text(&GrepCommand, &["F(", "/tmp/t.txt"]), "f(x) = 1");
    }

    #[test]
    fn test_grep_piped() {
        let mut h = Harness::new();
        let out = h.run_piped(&GrepCommand, &["txt"], "a.txt\nb.md\nc.TXT").unwrap();
        assert_eq!(out.into_text(), "a.txt\nc.TXT");
    }

    #[test]
    fn test_grep_invert_and_line_numbers() {
        let mut h = Harness::new();
        let out = h.run_piped(&GrepCommand, &["-vn", "b"], "a\nb\nc").unwrap();
        assert_eq!(out.into_text(), "1:a\n3:c");
    }

    #[test]
    fn test_grep_multiple_files_prefixes_names() {
        let mut h = Harness::with_files(&[("/tmp/a", "x1\ny"), ("/tmp/b", "x2")]);
        let out = h.text(&GrepCommand, &["x", "/tmp/a", "/tmp/missing", "/tmp/b"]);
        assert_eq!(
            out,
            "/tmp/a:x1\ngrep: '/tmp/missing': No such file or directory\n/tmp/b:x2"
        );
    }

    #[test]
    fn test_grep_missing_operands() {
        let mut h = Harness::with_files(&[("/tmp/a", "x")]);
        assert!(matches!(h.run(&GrepCommand, &[]), Err(CommandError::MissingOperand { .. })));
        assert!(matches!(h.run(&GrepCommand, &["x"]), Err(CommandError::MissingOperand { .. })));
    }
}
