//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::notify::{NotificationHandle, NotificationKind, NotificationSink};
use crate::core::session::StaticSession;
use crate::core::state::App;
use crate::remote::{Id, NewPost, Post, RemoteData, RemoteError, Subreddit};

/// One call made against a [`MockRemote`].
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteCall {
    FindSubreddits(String),
    CreateSubreddit(String),
    CreatePost(NewPost),
    ListPosts,
}

/// A scripted in-memory backend that records every call.
#[derive(Default)]
pub struct MockRemote {
    existing: Vec<Subreddit>,
    created_subreddit_id: Option<String>,
    find_error: Option<RemoteError>,
    create_subreddit_error: Option<RemoteError>,
    create_post_error: Option<RemoteError>,
    feed: Vec<Post>,
    calls: Mutex<Vec<RemoteCall>>,
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subreddits returned by the lookup, in this order.
    pub fn with_existing(mut self, ids: &[&str]) -> Self {
        self.existing = ids
            .iter()
            .map(|id| Subreddit {
                id: Id::new(*id),
                topic: "reactjs".to_string(),
                created_at: None,
            })
            .collect();
        self
    }

    pub fn with_created_subreddit_id(mut self, id: &str) -> Self {
        self.created_subreddit_id = Some(id.to_string());
        self
    }

    pub fn with_feed(mut self, posts: Vec<Post>) -> Self {
        self.feed = posts;
        self
    }

    pub fn fail_find(mut self, err: RemoteError) -> Self {
        self.find_error = Some(err);
        self
    }

    pub fn fail_create_subreddit(mut self, err: RemoteError) -> Self {
        self.create_subreddit_error = Some(err);
        self
    }

    pub fn fail_create_post(mut self, err: RemoteError) -> Self {
        self.create_post_error = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count_create_subreddit(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, RemoteCall::CreateSubreddit(_)))
            .count()
    }

    /// Every create-post attempt, successful or not.
    pub fn created_posts(&self) -> Vec<NewPost> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                RemoteCall::CreatePost(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: RemoteCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RemoteData for MockRemote {
    fn name(&self) -> &str {
        "mock"
    }

    async fn find_subreddits(&self, topic: &str) -> Result<Vec<Subreddit>, RemoteError> {
        self.record(RemoteCall::FindSubreddits(topic.to_string()));
        match &self.find_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.existing.clone()),
        }
    }

    async fn create_subreddit(&self, topic: &str) -> Result<Subreddit, RemoteError> {
        self.record(RemoteCall::CreateSubreddit(topic.to_string()));
        if let Some(err) = &self.create_subreddit_error {
            return Err(err.clone());
        }
        Ok(Subreddit {
            id: Id::new(self.created_subreddit_id.as_deref().unwrap_or("new")),
            topic: topic.to_string(),
            created_at: None,
        })
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, RemoteError> {
        self.record(RemoteCall::CreatePost(post.clone()));
        if let Some(err) = &self.create_post_error {
            return Err(err.clone());
        }
        Ok(sample_post("P1", &post.title, post.subreddit_id.as_str()))
    }

    async fn list_posts(&self) -> Result<Vec<Post>, RemoteError> {
        self.record(RemoteCall::ListPosts);
        Ok(self.feed.clone())
    }
}

pub fn sample_post(id: &str, title: &str, subreddit_id: &str) -> Post {
    Post {
        id: Id::new(id),
        title: title.to_string(),
        body: None,
        image: None,
        subreddit_id: Id::new(subreddit_id),
        username: Some("alice".to_string()),
        created_at: None,
    }
}

/// A notification sink that remembers every call, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<(NotificationKind, NotificationHandle, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, kind: NotificationKind) -> usize {
        self.events.iter().filter(|(k, _, _)| *k == kind).count()
    }
}

impl NotificationSink for RecordingSink {
    fn begin(&mut self, message: &str) -> NotificationHandle {
        let handle = NotificationHandle::new();
        self.events
            .push((NotificationKind::Loading, handle.clone(), message.to_string()));
        handle
    }

    fn succeed(&mut self, handle: &NotificationHandle, message: &str) {
        self.events
            .push((NotificationKind::Success, handle.clone(), message.to_string()));
    }

    fn fail(&mut self, handle: &NotificationHandle, message: &str) {
        self.events
            .push((NotificationKind::Error, handle.clone(), message.to_string()));
    }
}

/// Creates a signed-in test App with an unpinned form.
pub fn test_app() -> App {
    App::new(
        Arc::new(MockRemote::new()),
        Arc::new(StaticSession::new(Some("alice".to_string()))),
        None,
    )
}

/// Creates a test App with no signed-in user.
pub fn signed_out_app() -> App {
    App::new(
        Arc::new(MockRemote::new()),
        Arc::new(StaticSession::signed_out()),
        None,
    )
}
