//! Command history: a bounded, most-recent-first list of submitted lines
//! with a cursor for Up/Down navigation.

/// Maximum number of entries to keep; the oldest is evicted on overflow.
pub const MAX_HISTORY: usize = 50;

/// Cursor value meaning "not navigating": the user is on a fresh,
/// unsaved input line.
pub const FRESH_LINE: isize = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    /// ArrowUp: towards older entries.
    Older,
    /// ArrowDown: towards newer entries, ending at the fresh line.
    Newer,
}

#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    /// Newest first.
    entries: Vec<String>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line. Whitespace-only lines are ignored.
    /// Returns whether an entry was added.
    pub fn push(&mut self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return false;
        }

        self.entries.insert(0, trimmed.to_string());
        if self.entries.len() > MAX_HISTORY {
            self.entries.truncate(MAX_HISTORY);
        }
        true
    }

    /// Move the cursor and return the text to place in the input line.
    ///
    /// Returns `None` when the move has no effect (empty history, or
    /// moving newer from the fresh line); the input must stay untouched.
    /// Moving older past the oldest entry clamps to the oldest. Moving
    /// newer from entry 0 returns to the fresh line with empty text.
    pub fn navigate(
        &self,
        direction: HistoryDirection,
        cursor: isize,
    ) -> Option<(isize, String)> {
        if self.entries.is_empty() {
            return None;
        }

        let newest = 0;
        let oldest = self.entries.len() as isize - 1;
        let new_cursor = match direction {
            HistoryDirection::Older => (cursor + 1).min(oldest),
            HistoryDirection::Newer => {
                if cursor > newest {
                    cursor - 1
                } else if cursor == newest {
                    FRESH_LINE
                } else {
                    return None;
                }
            }
        };

        let text = if new_cursor == FRESH_LINE {
            String::new()
        } else {
            self.entries[new_cursor as usize].clone()
        };
        Some((new_cursor, text))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
