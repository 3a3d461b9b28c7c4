//! # Actions
//!
//! Everything that can happen in the post box becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The backend answers? That's `Action::SubmissionFinished(result)`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the adapter what I/O to start. No I/O happens here; the only outward call
//! is to the injected notification sink.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::draft::Field;
use crate::core::notify::{FAILURE_MESSAGE, LOADING_MESSAGE, NotificationSink, SUCCESS_MESSAGE};
use crate::core::state::{App, Submission};
use crate::core::workflow::{CreatedPost, PostRequest, SubmitError, prepare};
use crate::remote::{Post, RemoteError};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    EditField(Field, String),
    ToggleImageBox,
    Submit,
    SubmissionFinished(Result<CreatedPost, RemoteError>),
    RefreshFeed,
    FeedLoaded(Result<Vec<Post>, RemoteError>),
    Quit,
}

/// I/O the adapter must start after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    SpawnSubmission(PostRequest),
    SpawnFeedRefresh,
}

pub fn update(app: &mut App, action: Action, notifier: &mut dyn NotificationSink) -> Effect {
    match action {
        Action::EditField(field, value) => {
            app.draft.set(field, value);
            app.errors.clear_field(field);
            Effect::None
        }
        Action::ToggleImageBox => {
            app.image_box_open = !app.image_box_open;
            debug!("Image box open: {}", app.image_box_open);
            Effect::None
        }
        Action::Submit => {
            if app.is_submitting() {
                return reject(app, SubmitError::InProgress);
            }
            match prepare(&app.draft, app.fixed_subreddit.as_deref(), app.session.as_ref()) {
                Ok(request) => {
                    app.errors.clear();
                    let handle = notifier.begin(LOADING_MESSAGE);
                    app.submission = Submission::Submitting(handle);
                    app.status_message = format!("Posting to r/{}...", request.draft.topic);
                    Effect::SpawnSubmission(request)
                }
                Err(err) => reject(app, err),
            }
        }
        Action::SubmissionFinished(result) => {
            let Submission::Submitting(handle) = std::mem::take(&mut app.submission) else {
                warn!("Submission result arrived with no submission in flight; dropping it");
                return Effect::None;
            };
            match result {
                Ok(created) => {
                    app.draft.clear();
                    notifier.succeed(&handle, SUCCESS_MESSAGE);
                    app.status_message = if created.created_subreddit {
                        format!("Post created in a new subreddit ({})", created.subreddit_id)
                    } else {
                        String::from("Post created")
                    };
                    request_feed(app)
                }
                Err(err) => {
                    warn!("Post submission failed: {err}");
                    notifier.fail(&handle, FAILURE_MESSAGE);
                    app.status_message = String::from("Post failed, your draft was kept");
                    Effect::None
                }
            }
        }
        Action::RefreshFeed => {
            if app.feed_loading {
                return Effect::None;
            }
            app.feed_loading = true;
            Effect::SpawnFeedRefresh
        }
        Action::FeedLoaded(result) => {
            app.feed_loading = false;
            match result {
                Ok(posts) => {
                    info!("Feed loaded: {} post(s)", posts.len());
                    app.feed = posts;
                }
                Err(err) => {
                    warn!("Failed to load feed: {err}");
                    app.status_message = String::from("Could not load posts");
                }
            }
            if std::mem::take(&mut app.feed_refetch_pending) {
                debug!("Re-fetching feed for a post created mid-request");
                app.feed_loading = true;
                return Effect::SpawnFeedRefresh;
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Starts a feed request after a post lands. If one is already in flight it
/// may predate the post, so another is queued behind it.
fn request_feed(app: &mut App) -> Effect {
    if app.feed_loading {
        app.feed_refetch_pending = true;
        return Effect::None;
    }
    app.feed_loading = true;
    Effect::SpawnFeedRefresh
}

/// Local rejection: no remote call, no notification.
fn reject(app: &mut App, err: SubmitError) -> Effect {
    info!("Submit rejected: {err}");
    match err {
        SubmitError::Invalid(errors) => app.errors = errors,
        SubmitError::SignedOut => app.status_message = String::from("Sign In to Post"),
        SubmitError::InProgress => {
            app.status_message = String::from("Still creating the last post...")
        }
    }
    Effect::None
}
