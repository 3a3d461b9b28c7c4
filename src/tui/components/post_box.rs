//! # PostBox Component
//!
//! The post creation form.
//!
//! ```text
//! ╭ Create Post ──────────────────────────────────────╮
//! │Title:       Hello                           [img] │
//! │Body:        Text (Optional)                       │
//! │Subreddit:   i.e reactjs                           │   hidden when pinned
//! │Image URL:   Optional...                           │   only with the image box open
//! │- A Post Title is Required                         │   errors, if any
//! │                 [ Create Post ]                   │
//! ╰───────────────────────────────────────────────────╯
//! ```
//!
//! Everything below the title row only appears once a title is typed. When
//! nobody is signed in the title input is disabled and says so.
//!
//! The form's text lives in the core `FormDraft`; each field here keeps its
//! own buffer and cursor and reports edits as [`PostBoxEvent::Edit`].
//! [`PostBox::sync`] pulls the draft and the other props back in before
//! each frame, which is how a cleared draft empties the inputs.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::draft::{Field, ValidationErrors};
use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostBoxEvent {
    Edit(Field, String),
    ToggleImageBox,
    Submit,
}

pub struct PostBox {
    title: TextField,
    body: TextField,
    subreddit: TextField,
    image: TextField,
    focus: Field,
    // Props, refreshed by `sync`
    pub signed_in: bool,
    pub fixed_subreddit: Option<String>,
    pub image_box_open: bool,
    pub errors: ValidationErrors,
    pub submitting: bool,
}

impl Default for PostBox {
    fn default() -> Self {
        Self::new()
    }
}

impl PostBox {
    pub fn new() -> Self {
        let mut post_box = Self {
            title: TextField::new("Title", ""),
            body: TextField::new("Body", "Text (Optional)"),
            subreddit: TextField::new("Subreddit", "i.e reactjs"),
            image: TextField::new("Image URL", "Optional..."),
            focus: Field::Title,
            signed_in: false,
            fixed_subreddit: None,
            image_box_open: false,
            errors: ValidationErrors::new(),
            submitting: false,
        };
        post_box.refresh_title_field();
        post_box
    }

    /// Pulls the draft and every prop from the core state.
    pub fn sync(&mut self, app: &App) {
        self.signed_in = app.is_signed_in();
        self.fixed_subreddit = app.fixed_subreddit.clone();
        self.image_box_open = app.image_box_open;
        self.errors = app.errors.clone();
        self.submitting = app.is_submitting();

        for field in [Field::Title, Field::Body, Field::Subreddit, Field::Image] {
            self.field_mut(field).sync(app.draft.get(field));
        }
        self.refresh_title_field();
        if !self.visible_fields().contains(&self.focus) {
            self.focus = Field::Title;
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    fn has_title(&self) -> bool {
        !self.title.value().is_empty()
    }

    fn refresh_title_field(&mut self) {
        self.title.disabled = !self.signed_in;
        self.title.placeholder = match (self.signed_in, &self.fixed_subreddit) {
            (false, _) => "Sign In to Post".to_string(),
            (true, Some(topic)) => format!("Create a post in r/{topic}"),
            (true, None) => "Create a post by entering a Title".to_string(),
        };
    }

    /// Fields currently on screen, in tab order.
    pub fn visible_fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Title];
        if self.has_title() {
            fields.push(Field::Body);
            if self.fixed_subreddit.is_none() {
                fields.push(Field::Subreddit);
            }
            if self.image_box_open {
                fields.push(Field::Image);
            }
        }
        fields
    }

    fn field_mut(&mut self, field: Field) -> &mut TextField {
        match field {
            Field::Title => &mut self.title,
            Field::Body => &mut self.body,
            Field::Subreddit => &mut self.subreddit,
            Field::Image => &mut self.image,
        }
    }

    fn move_focus(&mut self, step: isize) {
        let fields = self.visible_fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(fields.len() as isize) as usize;
        self.focus = fields[next];
    }

    /// Rows inside the border: one per visible field, one per error, one
    /// for the submit control.
    fn content_rows(&self) -> u16 {
        let mut rows = self.visible_fields().len() as u16;
        rows += self.errors.len() as u16;
        if self.has_title() {
            rows += 1;
        }
        rows
    }

    /// Height including borders.
    pub fn required_height(&self) -> u16 {
        self.content_rows() + 2
    }

    fn block_title(&self) -> String {
        match &self.fixed_subreddit {
            Some(topic) => format!(" Create Post in r/{topic} "),
            None => " Create Post ".to_string(),
        }
    }
}

impl Component for PostBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if self.signed_in {
                Color::Gray
            } else {
                Color::DarkGray
            }))
            .title(self.block_title());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let fields = self.visible_fields();
        let mut constraints = vec![Constraint::Length(1); self.content_rows() as usize];
        constraints.push(Constraint::Min(0));
        let rows = Layout::vertical(constraints).split(inner);
        let mut row = 0;

        for field in &fields {
            let focused = *field == self.focus;
            let mut area = rows[row];
            if *field == Field::Title {
                let [input, icon] =
                    Layout::horizontal([Constraint::Min(0), Constraint::Length(6)]).areas(area);
                let icon_style = if self.image_box_open {
                    Style::default().fg(Color::LightBlue)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                frame.render_widget(
                    Paragraph::new(Span::styled("[img]", icon_style)).alignment(Alignment::Right),
                    icon,
                );
                area = input;
            }
            let text_field = self.field_mut(*field);
            text_field.focused = focused;
            text_field.render(frame, area);
            row += 1;
        }

        for error in self.errors.iter() {
            frame.render_widget(
                Paragraph::new(error.message()).style(Style::default().fg(Color::Red)),
                rows[row],
            );
            row += 1;
        }

        if self.has_title() {
            let (label, style) = if self.submitting {
                ("[ Posting... ]", Style::default().fg(Color::DarkGray))
            } else {
                (
                    "[ Create Post ]",
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                )
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(label, style))).alignment(Alignment::Center),
                rows[row],
            );
        }
    }
}

impl EventHandler for PostBox {
    type Event = PostBoxEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::NextField => {
                self.move_focus(1);
                None
            }
            TuiEvent::PrevField => {
                self.move_focus(-1);
                None
            }
            TuiEvent::ToggleImageBox => Some(PostBoxEvent::ToggleImageBox),
            TuiEvent::Submit => self.signed_in.then_some(PostBoxEvent::Submit),
            _ => {
                let focus = self.focus;
                let field = self.field_mut(focus);
                match field.handle_event(event)? {
                    FieldEvent::Changed => {
                        Some(PostBoxEvent::Edit(focus, field.value().to_string()))
                    }
                }
            }
        }
    }
}
