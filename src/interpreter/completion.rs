//! Tab completion
//!
//! The first word completes against built-in command names; later words
//! complete against directory entries, with `/` appended to directories.

use crate::commands::names_with_prefix;
use crate::fs::VirtualFileSystem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Exactly one candidate: the input line with the last word completed.
    Line(String),
    /// Several candidates, shown to the user as-is.
    Candidates(Vec<String>),
    NoMatch,
}

pub fn complete(input: &str, fs: &VirtualFileSystem) -> Completion {
    let (head, last) = match input.rfind(' ') {
        Some(i) => (&input[..=i], &input[i + 1..]),
        None => ("", input),
    };

    if head.is_empty() {
        let matches = names_with_prefix(last);
        return match matches.as_slice() {
            [] => Completion::NoMatch,
            [only] => Completion::Line(format!("{} ", only)),
            _ => Completion::Candidates(matches.iter().map(|m| m.to_string()).collect()),
        };
    }

    let (dir_part, prefix) = match last.rfind('/') {
        Some(i) => (&last[..=i], &last[i + 1..]),
        None => ("", last),
    };
    let search_dir = if dir_part.is_empty() { None } else { Some(dir_part) };
    let Ok(entries) = fs.list_directory(search_dir) else {
        return Completion::NoMatch;
    };

    let names: Vec<String> = entries
        .into_iter()
        .filter(|node| node.name.starts_with(prefix))
        .map(|node| {
            let suffix = if node.is_directory() { "/" } else { "" };
            format!("{}{}", node.name, suffix)
        })
        .collect();

    match names.as_slice() {
        [] => Completion::NoMatch,
        [only] => Completion::Line(format!("{}{}{}", head, dir_part, only)),
        _ => Completion::Candidates(names),
    }
}
