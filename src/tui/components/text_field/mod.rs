//! # TextField Component
//!
//! A single-line labelled input. Owns its buffer and cursor; the parent
//! keeps it in step with the core draft through [`TextField::sync`].
//!
//! ## Props
//!
//! - `label`: text in the left-hand column (empty = no column)
//! - `placeholder`: shown dimmed while the buffer is empty
//! - `focused`: draws the cursor and highlights the input
//! - `disabled`: ignores input and dims everything

mod edit;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use edit::{
    display_width, next_char_boundary, prev_char_boundary, prev_word_boundary, scroll_start,
};

/// Width of the label column, matching the widest label ("Subreddit:").
pub const LABEL_WIDTH: u16 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The buffer changed; read it with [`TextField::value`].
    Changed,
}

pub struct TextField {
    pub label: &'static str,
    pub placeholder: String,
    pub focused: bool,
    pub disabled: bool,
    buffer: String,
    /// Byte offset in `buffer`, always on a char boundary.
    cursor: usize,
}

impl TextField {
    pub fn new(label: &'static str, placeholder: impl Into<String>) -> Self {
        Self {
            label,
            placeholder: placeholder.into(),
            focused: false,
            disabled: false,
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Adopts `value` if it differs from the buffer (e.g. the draft was
    /// cleared after a successful post). The cursor moves to the end.
    pub fn sync(&mut self, value: &str) {
        if self.buffer != value {
            self.buffer = value.to_string();
            self.cursor = self.buffer.len();
        }
    }

    fn input_area(&self, area: Rect) -> Rect {
        if self.label.is_empty() {
            area
        } else {
            let [_, input] =
                Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(0)])
                    .areas(area);
            input
        }
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let input_area = self.input_area(area);

        if !self.label.is_empty() {
            let label = Paragraph::new(format!("{}:", self.label))
                .style(Style::default().fg(Color::Gray));
            frame.render_widget(label, area);
        }

        let mut style = if self.focused {
            Style::default().fg(Color::White).bg(Color::Rgb(30, 40, 60))
        } else {
            Style::default().fg(Color::White).bg(Color::Rgb(25, 25, 25))
        };
        if self.disabled {
            style = style.add_modifier(Modifier::DIM);
        }

        let start = scroll_start(&self.buffer, self.cursor, input_area.width);
        let text = if self.buffer.is_empty() {
            Span::styled(self.placeholder.as_str(), style.fg(Color::DarkGray))
        } else {
            Span::styled(&self.buffer[start..], style)
        };
        frame.render_widget(Paragraph::new(text).style(style), input_area);

        if self.focused && !self.disabled {
            let col = display_width(&self.buffer[start..self.cursor]);
            let x = input_area.x + col.min(input_area.width.saturating_sub(1));
            frame.set_cursor_position((x, input_area.y));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.disabled {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(FieldEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: newlines become spaces
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(FieldEvent::Changed)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                FieldEvent::Changed
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                FieldEvent::Changed
            }),
            TuiEvent::DeleteWord => (self.cursor > 0).then(|| {
                let start = prev_word_boundary(&self.buffer, self.cursor);
                self.buffer.drain(start..self.cursor);
                self.cursor = start;
                FieldEvent::Changed
            }),
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn typed(text: &str) -> TextField {
        let mut field = TextField::new("Body", "Text (Optional)");
        for c in text.chars() {
            field.handle_event(&TuiEvent::InputChar(c));
        }
        field
    }

    fn screen(field: &mut TextField, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal.draw(|f| field.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut field = typed("héllo");
        assert_eq!(field.value(), "héllo");

        assert_eq!(field.handle_event(&TuiEvent::Backspace), Some(FieldEvent::Changed));
        assert_eq!(field.value(), "héll");
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut field = typed("ac");
        field.handle_event(&TuiEvent::CursorLeft);
        field.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn test_delete_word() {
        let mut field = typed("hello big world");
        field.handle_event(&TuiEvent::DeleteWord);
        assert_eq!(field.value(), "hello big ");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut field = TextField::new("Body", "");
        assert_eq!(field.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut field = TextField::new("Body", "");
        field.handle_event(&TuiEvent::Paste("a\nb".to_string()));
        assert_eq!(field.value(), "a b");
    }

    #[test]
    fn test_disabled_ignores_input() {
        let mut field = TextField::new("", "Sign In to Post");
        field.disabled = true;
        assert_eq!(field.handle_event(&TuiEvent::InputChar('x')), None);
        assert!(field.value().is_empty());
    }

    #[test]
    fn test_sync_adopts_external_value() {
        let mut field = typed("draft");
        field.sync("");
        assert_eq!(field.value(), "");
        field.handle_event(&TuiEvent::InputChar('n'));
        assert_eq!(field.value(), "n");
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let mut field = TextField::new("Body", "Text (Optional)");
        let text = screen(&mut field, 40);
        assert!(text.contains("Body:"));
        assert!(text.contains("Text (Optional)"));
    }

    #[test]
    fn test_render_shows_value() {
        let mut field = typed("World");
        field.focused = true;
        let text = screen(&mut field, 40);
        assert!(text.contains("World"));
        assert!(!text.contains("Text (Optional)"));
    }
}
