//! Command history with up/down recall.

/// Append-only list of submitted lines plus a recall cursor.
///
/// The cursor counts back from the newest entry; `None` means the user is
/// editing a fresh line.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    recall: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and reset recall.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.recall = None;
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Step to an older entry (arrow up). Stays on the oldest once reached.
    pub fn previous(&mut self) -> Option<&str> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }
        let step = self.recall.map_or(0, |i| (i + 1).min(len - 1));
        self.recall = Some(step);
        Some(&self.entries[len - 1 - step])
    }

    /// Step to a newer entry (arrow down). Returns `None` when stepping past
    /// the newest entry, which leaves the input line blank.
    pub fn next(&mut self) -> Option<&str> {
        match self.recall {
            Some(i) if i > 0 => {
                self.recall = Some(i - 1);
                Some(&self.entries[self.entries.len() - i])
            }
            _ => {
                self.recall = None;
                None
            }
        }
    }
}
