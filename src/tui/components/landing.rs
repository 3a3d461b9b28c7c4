//! # Landing Page Component
//!
//! The home page: the post box on top, the feed below, in a centered column
//! no wider than [`MAX_WIDTH`].

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{Feed, PostBox};

pub const MAX_WIDTH: u16 = 100;

pub struct LandingPage<'a> {
    pub app: &'a App,
    pub post_box: &'a mut PostBox,
    pub now: DateTime<Utc>,
}

impl<'a> LandingPage<'a> {
    pub fn new(app: &'a App, post_box: &'a mut PostBox, now: DateTime<Utc>) -> Self {
        Self { app, post_box, now }
    }
}

impl Component for LandingPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [column] = Layout::horizontal([Constraint::Max(MAX_WIDTH)])
            .flex(Flex::Center)
            .areas(area);

        let [form_area, feed_area] = Layout::vertical([
            Constraint::Length(self.post_box.required_height()),
            Constraint::Min(0),
        ])
        .areas(column);

        self.post_box.render(frame, form_area);
        Feed::new(&self.app.feed, self.app.feed_loading, self.now).render(frame, feed_area);
    }
}
