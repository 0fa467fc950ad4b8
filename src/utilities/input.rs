// Text Input
// Single-line editable buffer used by the chat modal and the chatbot

/// Editable single-line text with a character cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    value: String,
    /// Cursor position in characters, not bytes
    cursor: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn insert(&mut self, c: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.value.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let byte_idx = self.byte_index(self.cursor - 1);
        self.value.remove(byte_idx);
        self.cursor -= 1;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    /// Take the current contents, leaving the line empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputLine {
        let mut input = InputLine::new();
        text.chars().for_each(|c| input.insert(c));
        input
    }

    #[test]
    fn test_insert_and_backspace_mid_line() {
        let mut input = typed("helo");
        input.move_left();
        input.insert('l');
        assert_eq!(input.value(), "hello");

        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "heo");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = typed("hi 👋");
        input.backspace();
        assert_eq!(input.value(), "hi ");
        input.move_right();
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_take_resets() {
        let mut input = typed("  ");
        assert!(input.is_blank());
        assert_eq!(input.take(), "  ");
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }
}
