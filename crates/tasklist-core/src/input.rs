/// Single-line text buffer with a byte-indexed cursor that always sits on
/// a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set(text.into());
        input
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Remove the word before the cursor along with any whitespace between
    /// it and the cursor.
    pub fn delete_word_back(&mut self) {
        let head = &self.buffer[..self.cursor];
        let trimmed = head.trim_end();
        let start = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        self.buffer.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, text: String) {
        self.buffer = text;
        self.cursor = self.buffer.len();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    /// Cursor position counted in chars, for placing the terminal cursor.
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let input = InputState::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
        assert_eq!(input.as_str(), "");
    }

    #[test]
    fn test_with_text_places_cursor_at_end() {
        let input = InputState::with_text("milk");
        assert_eq!(input.as_str(), "milk");
        assert_eq!(input.cursor_pos(), 4);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = InputState::with_text("ac");
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.as_str(), "abc");
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn test_backspace_and_delete_at_edges_are_noops() {
        let mut input = InputState::with_text("a");
        input.delete();
        assert_eq!(input.as_str(), "a");

        input.move_home();
        input.backspace();
        assert_eq!(input.as_str(), "a");
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_delete_removes_char_under_cursor() {
        let mut input = InputState::with_text("abc");
        input.move_home();
        input.delete();
        assert_eq!(input.as_str(), "bc");
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_delete_word_back() {
        let mut input = InputState::with_text("walk the dog  ");
        input.delete_word_back();
        assert_eq!(input.as_str(), "walk the ");
        input.delete_word_back();
        assert_eq!(input.as_str(), "walk ");
        input.delete_word_back();
        assert_eq!(input.as_str(), "");
        input.delete_word_back();
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_delete_word_back_keeps_text_after_cursor() {
        let mut input = InputState::with_text("buy oat milk");
        for _ in 0..4 {
            input.move_left();
        }
        input.delete_word_back();
        assert_eq!(input.as_str(), "buy milk");
        assert_eq!(input.cursor_pos(), 4);
    }

    #[test]
    fn test_multibyte_navigation() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('\u{00e9}');
        input.insert_char('\u{1f600}');
        assert_eq!(input.cursor_pos(), 7);
        assert_eq!(input.cursor_column(), 3);

        input.move_left();
        assert_eq!(input.cursor_pos(), 3);
        input.backspace();
        assert_eq!(input.as_str(), "a\u{1f600}");
        assert_eq!(input.cursor_column(), 1);

        input.move_right();
        assert_eq!(input.cursor_pos(), 5);
        input.move_right();
        assert_eq!(input.cursor_pos(), 5);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = InputState::with_text("xyz");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
    }
}
