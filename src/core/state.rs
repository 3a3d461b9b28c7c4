//! # Application State
//!
//! Core business state for the post box. Domain logic only, no TUI types.
//! Presentation state (cursors, focus, the notification stack) lives in
//! the `tui` module.
//!
//! ```text
//! App
//! ├── remote: Arc<dyn RemoteData>        // GraphQL backend
//! ├── session: Arc<dyn SessionProvider>  // who is signed in
//! ├── fixed_subreddit: Option<String>    // form pinned to one topic
//! ├── draft: FormDraft                   // what the user is typing
//! ├── errors: ValidationErrors           // from the last submit attempt
//! ├── image_box_open: bool               // image URL input shown
//! ├── submission: Submission             // idle | submitting
//! ├── feed: Vec<Post>                    // posts shown under the form
//! ├── feed_loading: bool                 // feed request in flight
//! └── status_message: String             // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::draft::{FormDraft, ValidationErrors};
use crate::core::notify::NotificationHandle;
use crate::core::session::SessionProvider;
use crate::remote::{Post, RemoteData};

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    /// Remote calls in flight; the handle resolves the loading notification.
    Submitting(NotificationHandle),
}

pub struct App {
    pub remote: Arc<dyn RemoteData>,
    pub session: Arc<dyn SessionProvider>,
    pub fixed_subreddit: Option<String>,
    pub draft: FormDraft,
    pub errors: ValidationErrors,
    pub image_box_open: bool,
    pub submission: Submission,
    pub feed: Vec<Post>,
    pub feed_loading: bool,
    /// A post landed while a feed request was in flight; fetch again after it.
    pub feed_refetch_pending: bool,
    pub status_message: String,
}

impl App {
    pub fn new(
        remote: Arc<dyn RemoteData>,
        session: Arc<dyn SessionProvider>,
        fixed_subreddit: Option<String>,
    ) -> Self {
        let status_message = match session.current_user() {
            Some(user) => format!("Signed in as {}", user.name),
            None => String::from("Not signed in"),
        };
        Self {
            remote,
            session,
            fixed_subreddit: fixed_subreddit.filter(|s| !s.trim().is_empty()),
            draft: FormDraft::new(),
            errors: ValidationErrors::new(),
            image_box_open: false,
            submission: Submission::Idle,
            feed: Vec::new(),
            feed_loading: false,
            feed_refetch_pending: false,
            status_message,
        }
    }

    pub fn from_config(
        remote: Arc<dyn RemoteData>,
        session: Arc<dyn SessionProvider>,
        config: &ResolvedConfig,
    ) -> Self {
        Self::new(remote, session, config.subreddit.clone())
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.submission, Submission::Submitting(_))
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_signed_in()
    }
}
