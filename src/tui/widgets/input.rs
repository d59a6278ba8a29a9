//! Text input widget
//!
//! A single-line text field with a cursor. The cursor is a character index,
//! so multi-byte input such as "£" edits correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Width reserved for field labels so values line up
const LABEL_WIDTH: usize = 19;

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content and move the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = vec![Span::styled(
            format!("{:>width$}: ", self.label, width = LABEL_WIDTH - 2),
            label_style,
        )];

        if self.focused {
            let value_style = Style::default().fg(Color::White);
            let before: String = self.content.chars().take(self.cursor).collect();
            let mut rest = self.content.chars().skip(self.cursor);
            let cursor_char = rest.next().unwrap_or(' ');
            let after: String = rest.collect();

            spans.push(Span::styled(before, value_style));
            spans.push(Span::styled(
                cursor_char.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            spans.push(Span::styled(after, value_style));
        } else if self.content.is_empty() {
            spans.push(Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::styled(self.content, Style::default().fg(Color::Yellow)));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new().content("42");
        input.insert('.');
        input.insert('5');
        assert_eq!(input.value(), "42.5");

        input.backspace();
        assert_eq!(input.value(), "42.");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        input.insert('£');
        input.insert('5');
        assert_eq!(input.value(), "£5");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "5");

        input.move_end();
        input.move_left();
        input.insert('£');
        assert_eq!(input.value(), "£5");
        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "5");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().content("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.move_start();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.backspace();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().content("2024");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }
}
