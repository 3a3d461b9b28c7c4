//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the landing
//! page, and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event loop
//!
//! ```text
//! keys ──► PostBox ──► Action ──► update() ──► Effect ──► tokio::spawn
//!                                    ▲                         │
//!                                    └──── mpsc<Action> ◄──────┘
//! ```
//!
//! Remote work runs on spawned tasks that report back over a channel. Once
//! the loop exits nothing drains the channel, so late results go nowhere.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (a loading toast or feed request is pending): redraw
//!   every ~100ms so the spinner moves.
//! - **Idle**: sleep up to 500ms, only redraw on events, toast expiry or
//!   background results.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::session::StaticSession;
use crate::core::state::App;
use crate::core::workflow::{PostRequest, submit_post};
use crate::remote::{GraphqlClient, RemoteData, RemoteError};
use crate::tui::component::EventHandler;
use crate::tui::components::{PostBox, PostBoxEvent, Toaster};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub post_box: PostBox,
    /// The app's notification sink
    pub toaster: Toaster,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            post_box: PostBox::new(),
            toaster: Toaster::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Build the GraphQL backend from a resolved config.
pub fn build_remote(config: &ResolvedConfig) -> Result<Arc<dyn RemoteData>, RemoteError> {
    let client = GraphqlClient::with_timeout(
        config.endpoint.clone(),
        config.api_key.clone(),
        config.request_timeout,
    )?;
    info!("Using GraphQL endpoint {}", client.endpoint());
    Ok(Arc::new(client))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let remote = build_remote(&config).map_err(std::io::Error::other)?;
    let session = Arc::new(StaticSession::new(config.username.clone()));
    let mut app = App::from_config(remote, session, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {e}");
            None
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    dispatch(&mut app, &mut tui, Action::RefreshFeed, &tx);

    loop {
        tui.post_box.sync(&app);
        if tui.toaster.expire(Instant::now()) {
            needs_redraw = true;
        }

        let animating = tui.toaster.is_animating() || app.feed_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.toaster.spinner_frame = (start_time.elapsed().as_secs_f32() * 8.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, Utc::now()))?;
            needs_redraw = false;
        }

        // Short timeout while something is on a clock, long when idle
        let timeout = if animating || !tui.toaster.is_empty() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => continue,
                TuiEvent::Quit => Action::Quit,
                TuiEvent::RefreshFeed => Action::RefreshFeed,
                other => match tui.post_box.handle_event(&other) {
                    Some(PostBoxEvent::Edit(field, value)) => Action::EditField(field, value),
                    Some(PostBoxEvent::ToggleImageBox) => Action::ToggleImageBox,
                    Some(PostBoxEvent::Submit) => Action::Submit,
                    None => continue,
                },
            };
            if dispatch(&mut app, &mut tui, action, &tx) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (remote results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            dispatch(&mut app, &mut tui, action, &tx);
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Applies one action and starts whatever I/O it asks for. Returns true on quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(app, action, &mut tui.toaster) {
        Effect::Quit => return true,
        Effect::SpawnSubmission(request) => {
            spawn_submission(app.remote.clone(), request, tx.clone());
        }
        Effect::SpawnFeedRefresh => {
            spawn_feed_refresh(app.remote.clone(), tx.clone());
        }
        Effect::None => {}
    }
    false
}

fn spawn_submission(remote: Arc<dyn RemoteData>, request: PostRequest, tx: mpsc::Sender<Action>) {
    info!("Spawning submission for r/{}", request.draft.topic);
    tokio::spawn(async move {
        let result = submit_post(remote.as_ref(), &request).await;
        if tx.send(Action::SubmissionFinished(result)).is_err() {
            warn!("Failed to send submission result: receiver dropped");
        }
    });
}

fn spawn_feed_refresh(remote: Arc<dyn RemoteData>, tx: mpsc::Sender<Action>) {
    debug!("Spawning feed refresh");
    tokio::spawn(async move {
        let result = remote.list_posts().await;
        if tx.send(Action::FeedLoaded(result)).is_err() {
            warn!("Failed to send feed result: receiver dropped");
        }
    });
}
