//! The active input line: text, cursor, and history position.
//!
//! Plain text-field editing lives here; the key-to-action wiring sits in
//! the application dispatch so this stays testable in isolation.

use crate::history::FRESH_LINE;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone)]
pub struct InputState {
    text: String,
    /// Byte offset of the cursor within `text`, always on a char boundary.
    cursor: usize,
    /// History cursor: -1 means a fresh, unsaved line.
    pub history_cursor: isize,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            history_cursor: FRESH_LINE,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole line and put the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// Clear the line and return what it held. Resets the history cursor.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        self.history_cursor = FRESH_LINE;
        std::mem::take(&mut self.text)
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let mut char_start = self.cursor - 1;
            while char_start > 0 && !self.text.is_char_boundary(char_start) {
                char_start -= 1;
            }
            self.text.remove(char_start);
            self.cursor = char_start;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            let mut new_pos = self.cursor - 1;
            while new_pos > 0 && !self.text.is_char_boundary(new_pos) {
                new_pos -= 1;
            }
            self.cursor = new_pos;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            let mut new_pos = self.cursor + 1;
            while new_pos < self.text.len() && !self.text.is_char_boundary(new_pos) {
                new_pos += 1;
            }
            self.cursor = new_pos;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Display column of the cursor (terminal cells, not bytes).
    pub fn cursor_column(&self) -> u16 {
        self.text[..self.cursor].width() as u16
    }
}
