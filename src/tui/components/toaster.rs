//! # Toaster Component
//!
//! The terminal's [`NotificationSink`]: a small stack of transient messages
//! drawn over the top-right corner.
//!
//! Resolving a handle rewrites that toast in place and restarts its clock.
//! Loading toasts stay until resolved; success toasts expire after
//! [`SUCCESS_TTL`], failures after [`ERROR_TTL`].

use std::time::{Duration, Instant};

use log::debug;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::core::notify::{NotificationHandle, NotificationKind, NotificationSink};
use crate::tui::component::Component;

pub const SUCCESS_TTL: Duration = Duration::from_secs(2);
pub const ERROR_TTL: Duration = Duration::from_secs(4);

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

#[derive(Debug, Clone)]
pub struct Toast {
    pub handle: NotificationHandle,
    pub kind: NotificationKind,
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    fn expired(&self, now: Instant) -> bool {
        let ttl = match self.kind {
            NotificationKind::Loading => return false,
            NotificationKind::Success => SUCCESS_TTL,
            NotificationKind::Error => ERROR_TTL,
        };
        now.duration_since(self.shown_at) >= ttl
    }
}

#[derive(Debug, Default)]
pub struct Toaster {
    toasts: Vec<Toast>,
    /// Animation frame for the loading spinner (prop).
    pub spinner_frame: usize,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// True while a toast is loading, i.e. the spinner needs redraws.
    pub fn is_animating(&self) -> bool {
        self.toasts.iter().any(|t| t.kind == NotificationKind::Loading)
    }

    /// Drops expired toasts. Returns true if anything was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.expired(now));
        before != self.toasts.len()
    }

    fn resolve(&mut self, handle: &NotificationHandle, kind: NotificationKind, message: &str) {
        let toast = Toast {
            handle: handle.clone(),
            kind,
            message: message.to_string(),
            shown_at: Instant::now(),
        };
        match self.toasts.iter_mut().find(|t| t.handle == *handle) {
            Some(existing) => *existing = toast,
            // Already expired or never shown: show it fresh.
            None => self.toasts.push(toast),
        }
    }
}

impl NotificationSink for Toaster {
    fn begin(&mut self, message: &str) -> NotificationHandle {
        let handle = NotificationHandle::new();
        debug!("Toast {handle} loading: {message}");
        self.toasts.push(Toast {
            handle: handle.clone(),
            kind: NotificationKind::Loading,
            message: message.to_string(),
            shown_at: Instant::now(),
        });
        handle
    }

    fn succeed(&mut self, handle: &NotificationHandle, message: &str) {
        debug!("Toast {handle} success: {message}");
        self.resolve(handle, NotificationKind::Success, message);
    }

    fn fail(&mut self, handle: &NotificationHandle, message: &str) {
        debug!("Toast {handle} error: {message}");
        self.resolve(handle, NotificationKind::Error, message);
    }
}

impl Component for Toaster {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut y = area.y;
        for toast in &self.toasts {
            let (icon, color) = match toast.kind {
                NotificationKind::Loading => {
                    (SPINNER[self.spinner_frame % SPINNER.len()], Color::Yellow)
                }
                NotificationKind::Success => ("✓", Color::Green),
                NotificationKind::Error => ("✗", Color::Red),
            };
            let width = (toast.message.chars().count() as u16 + 6).min(area.width);
            if y + 3 > area.y + area.height {
                break;
            }
            let rect = Rect {
                x: area.x + area.width - width,
                y,
                width,
                height: 3,
            };
            let line = Line::from(vec![
                Span::styled(format!("{icon} "), Style::default().fg(color)),
                Span::raw(toast.message.as_str()),
            ]);
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color));
            frame.render_widget(Clear, rect);
            frame.render_widget(Paragraph::new(line).block(block), rect);
            y += 3;
        }
    }
}
