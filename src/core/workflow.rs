//! # Post Submission Workflow
//!
//! Lookup-or-create the topic, then create the post under it.
//!
//! ```text
//! prepare(draft)           local checks, no I/O
//!     │
//!     ▼
//! find_subreddits(topic)
//!     │
//!     ├── [] ──────► create_subreddit(topic) ──┐
//!     │                                        ▼
//!     └── [first, ..] ─────────────────► create_post(.., subreddit_id)
//! ```
//!
//! The two writes are independent: if the post fails after the subreddit was
//! created, the subreddit stays. Nothing here retries or compensates.
//!
//! [`submit_post`] only returns a `Result`. Turning it into notifications and
//! form resets is the caller's job (see `core::action`).

use std::fmt;

use log::{info, warn};

use crate::core::draft::{FormDraft, ValidDraft, ValidationErrors};
use crate::core::session::SessionProvider;
use crate::remote::{Id, NewPost, Post, RemoteData, RemoteError};

/// Why a submission never reached the network.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// Nobody is signed in, so there is no author.
    SignedOut,
    /// A previous submission has not finished yet.
    InProgress,
    /// Required fields are missing.
    Invalid(ValidationErrors),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::SignedOut => write!(f, "sign in to post"),
            SubmitError::InProgress => write!(f, "a post is already being created"),
            SubmitError::Invalid(errors) => write!(f, "invalid post: {errors}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Everything needed to run the remote sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRequest {
    pub draft: ValidDraft,
    pub author: String,
}

/// What the remote sequence produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedPost {
    pub post: Post,
    pub subreddit_id: Id,
    /// True if the subreddit did not exist and was created on the way.
    pub created_subreddit: bool,
}

/// Local checks: a signed-in author and a valid draft.
pub fn prepare(
    draft: &FormDraft,
    fixed_subreddit: Option<&str>,
    session: &dyn SessionProvider,
) -> Result<PostRequest, SubmitError> {
    let user = session.current_user().ok_or(SubmitError::SignedOut)?;
    let valid = draft
        .validate(fixed_subreddit)
        .map_err(SubmitError::Invalid)?;
    Ok(PostRequest {
        draft: valid,
        author: user.name,
    })
}

/// Runs the remote sequence. The first error aborts the rest.
pub async fn submit_post(
    remote: &dyn RemoteData,
    request: &PostRequest,
) -> Result<CreatedPost, RemoteError> {
    let topic = request.draft.topic.as_str();
    info!("Submitting post {:?} to r/{} via {}", request.draft.title, topic, remote.name());

    let existing = remote.find_subreddits(topic).await?;

    let (subreddit_id, created_subreddit) = match existing.into_iter().next() {
        Some(subreddit) => {
            info!("Using existing subreddit r/{} (id={})", topic, subreddit.id);
            (subreddit.id, false)
        }
        None => {
            info!("Subreddit r/{topic} is new, creating it");
            let subreddit = remote.create_subreddit(topic).await?;
            (subreddit.id, true)
        }
    };

    let new_post = NewPost {
        title: request.draft.title.clone(),
        body: request.draft.body.clone(),
        image: request.draft.image.clone(),
        subreddit_id: subreddit_id.clone(),
        username: request.author.clone(),
    };

    let post = remote.create_post(&new_post).await.inspect_err(|e| {
        if created_subreddit {
            warn!("Post creation failed after creating r/{topic} (id={subreddit_id}): {e}");
        }
    })?;

    info!("New post added: id={}", post.id);
    Ok(CreatedPost {
        post,
        subreddit_id,
        created_subreddit,
    })
}
