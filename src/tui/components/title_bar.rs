//! # TitleBar Component
//!
//! Top status bar: app name, who is signed in, and the latest status text.
//!
//! Stateless; every field is a prop:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(Some("alice".into()), app.status_message.clone());
//! title_bar.render(frame, title_area);
//! ```
//!
//! Format priority: `postbox | u/alice | Post created`, dropping the status
//! when it is empty and showing `signed out` when there is no user.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub username: Option<String>,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(username: Option<String>, status_message: String) -> Self {
        Self {
            username,
            status_message,
        }
    }

    fn line(&self) -> Line<'_> {
        let mut spans = vec![Span::styled(
            "postbox",
            Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        )];
        spans.push(Span::raw(" | "));
        spans.push(match &self.username {
            Some(name) => Span::styled(format!("u/{name}"), Style::default().fg(Color::Cyan)),
            None => Span::styled("signed out", Style::default().fg(Color::DarkGray)),
        });
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(self.status_message.as_str()));
        }
        Line::from(spans)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(bar: &TitleBar) -> String {
        bar.line().spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_signed_in_with_status() {
        let bar = TitleBar::new(Some("alice".into()), "Post created".into());
        assert_eq!(text(&bar), "postbox | u/alice | Post created");
    }

    #[test]
    fn test_signed_out_without_status() {
        let bar = TitleBar::new(None, String::new());
        assert_eq!(text(&bar), "postbox | signed out");
    }
}
