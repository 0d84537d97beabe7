//! Text input widget
//!
//! A single-line text field with a cursor. The cursor counts characters, not
//! bytes, so names and descriptions may hold any Unicode text.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Render every character as '*'
    pub masked: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Set content, placing the cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, cursor: usize) -> usize {
        self.content
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Content as it would read after inserting `c` at the cursor
    pub fn with_inserted(&self, c: char) -> String {
        let mut candidate = self.content.clone();
        candidate.insert(self.byte_index(self.cursor), c);
        candidate
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

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width: u16 = if self.label.is_empty() {
            0
        } else {
            (self.label.chars().count() + 2) as u16
        };
        let input_start = area.x + label_width;

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(&self.label, Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        let shown: String = if self.masked {
            "*".repeat(self.char_count())
        } else {
            self.content.clone()
        };

        let (display_text, text_style) = if self.content.is_empty() && !self.focused {
            (self.placeholder.clone(), Style::default().fg(Color::DarkGray))
        } else if self.focused {
            (shown.clone(), Style::default().fg(Color::White))
        } else {
            (shown.clone(), Style::default().fg(Color::Yellow))
        };

        buf.set_stringn(
            input_start,
            area.y,
            &display_text,
            area.width.saturating_sub(label_width) as usize,
            text_style,
        );

        if self.focused {
            let cursor_x = input_start + self.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = shown.chars().nth(self.cursor).unwrap_or('_');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace_multibyte() {
        let mut input = TextInput::new().content("Café");
        assert_eq!(input.cursor, 4);
        input.backspace();
        assert_eq!(input.value(), "Caf");
        input.move_start();
        input.insert('é');
        assert_eq!(input.value(), "éCaf");
        input.delete();
        assert_eq!(input.value(), "éaf");
    }

    #[test]
    fn test_with_inserted_leaves_content() {
        let mut input = TextInput::new().content("12");
        input.move_left();
        assert_eq!(input.with_inserted('.'), "1.2");
        assert_eq!(input.value(), "12");
    }
}
