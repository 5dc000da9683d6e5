//! Single-line editable text with a grapheme-aware cursor.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Glyph drawn in place of each hidden character.
pub const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    /// Byte offset, always on a grapheme boundary.
    cursor: usize,
}

impl TextField {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Inserts pasted text. Line breaks and other control characters are dropped.
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.text[..self.cursor].grapheme_indices(true).next_back() {
            self.text.replace_range(idx..self.cursor, "");
            self.cursor = idx;
        }
    }

    pub fn delete(&mut self) {
        if let Some(g) = self.text[self.cursor..].graphemes(true).next() {
            let end = self.cursor + g.len();
            self.text.replace_range(self.cursor..end, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.text[..self.cursor].grapheme_indices(true).next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(g) = self.text[self.cursor..].graphemes(true).next() {
            self.cursor += g.len();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Text as drawn on screen, optionally masked.
    pub fn display(&self, masked: bool) -> String {
        if masked {
            MASK_CHAR
                .to_string()
                .repeat(self.text.graphemes(true).count())
        } else {
            self.text.clone()
        }
    }

    /// Terminal column of the cursor within `display(masked)`.
    pub fn cursor_column(&self, masked: bool) -> usize {
        let before = &self.text[..self.cursor];
        if masked {
            before.graphemes(true).count()
        } else {
            before.width()
        }
    }
}
