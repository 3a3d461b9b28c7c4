use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{LandingPage, TitleBar};

const HELP_TEXT: &str =
    "Enter post · Tab/↑↓ field · Ctrl+P image · Ctrl+R refresh · Esc quit";

/// Width of the toast column in the top-right corner.
const TOAST_WIDTH: u16 = 40;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: DateTime<Utc>) {
    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let username = app.session.current_user().map(|u| u.name);
    TitleBar::new(username, app.status_message.clone()).render(frame, title_area);

    LandingPage::new(app, &mut tui.post_box, now).render(frame, main_area);

    frame.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if !tui.toaster.is_empty() {
        tui.toaster.render(frame, toast_area(main_area));
    }
}

fn toast_area(main_area: Rect) -> Rect {
    let width = TOAST_WIDTH.min(main_area.width);
    Rect {
        x: main_area.x + main_area.width - width,
        y: main_area.y,
        width,
        height: main_area.height,
    }
}
