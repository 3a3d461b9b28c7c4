//! # Feed Component
//!
//! The list of existing posts under the form. Stateless: rebuilt from the
//! core state every frame, like `TitleBar`.

use chrono::{DateTime, NaiveDateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::remote::Post;
use crate::tui::component::Component;

/// Body lines shown per post before eliding the rest.
const MAX_BODY_LINES: usize = 3;

pub struct Feed<'a> {
    pub posts: &'a [Post],
    pub loading: bool,
    pub now: DateTime<Utc>,
}

impl<'a> Feed<'a> {
    pub fn new(posts: &'a [Post], loading: bool, now: DateTime<Utc>) -> Self {
        Self { posts, loading, now }
    }

    fn post_lines(&self, post: &'a Post, width: usize) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        let mut meta = format!("u/{}", post.username.as_deref().unwrap_or("anonymous"));
        if let Some(age) = post.created_at.as_deref().and_then(|t| time_ago(t, self.now)) {
            meta.push_str(&format!(" · {age}"));
        }
        lines.push(Line::from(Span::styled(meta, Style::default().fg(Color::DarkGray))));
        lines.push(Line::from(Span::styled(
            post.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )));

        if let Some(body) = post.body.as_deref().filter(|b| !b.is_empty()) {
            let wrapped = textwrap::wrap(body, width.max(1));
            let elided = wrapped.len() > MAX_BODY_LINES;
            for (i, line) in wrapped.into_iter().take(MAX_BODY_LINES).enumerate() {
                let mut text = line.into_owned();
                if elided && i + 1 == MAX_BODY_LINES {
                    text.push('…');
                }
                lines.push(Line::from(text));
            }
        }
        if let Some(image) = post.image.as_deref().filter(|i| !i.is_empty()) {
            lines.push(Line::from(Span::styled(
                format!("image: {image}"),
                Style::default().fg(Color::LightBlue),
            )));
        }
        lines.push(Line::default());
        lines
    }
}

impl Component for Feed<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.loading { " Feed (loading...) " } else { " Feed " };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title);
        let width = block.inner(area).width as usize;

        let lines: Vec<Line> = if self.posts.is_empty() {
            vec![Line::from(Span::styled(
                if self.loading { "Loading posts..." } else { "No posts yet." },
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.posts
                .iter()
                .flat_map(|post| self.post_lines(post, width))
                .collect()
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// "just now", "5m ago", "3h ago", "2d ago". `None` if `timestamp` is not
/// a recognisable date.
pub fn time_ago(timestamp: &str, now: DateTime<Utc>) -> Option<String> {
    let then = DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S%.f").map(|t| t.and_utc())
        })
        .ok()?;

    let secs = (now - then).num_seconds().max(0);
    Some(match secs {
        0..=59 => "just now".to_string(),
        60..=3599 => format!("{}m ago", secs / 60),
        3600..=86_399 => format!("{}h ago", secs / 3600),
        _ => format!("{}d ago", secs / 86_400),
    })
}
