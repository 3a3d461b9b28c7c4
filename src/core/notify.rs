//! # Notifications
//!
//! The boundary to whatever shows transient status messages. A message is
//! opened with [`NotificationSink::begin`] and later resolved with `succeed`
//! or `fail` using the same handle, which replaces the message in place
//! instead of stacking a second one.

use std::fmt;

/// Opaque key for a message shown by a [`NotificationSink`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationHandle(String);

impl NotificationHandle {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for NotificationHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Loading,
    Success,
    Error,
}

pub const LOADING_MESSAGE: &str = "Creating New Post...";
pub const SUCCESS_MESSAGE: &str = "New Post Created!";
pub const FAILURE_MESSAGE: &str = "Whoops, something went wrong!";

pub trait NotificationSink {
    /// Shows a loading message and returns the handle to resolve it with.
    fn begin(&mut self, message: &str) -> NotificationHandle;

    /// Replaces the message under `handle` with a success message.
    fn succeed(&mut self, handle: &NotificationHandle, message: &str);

    /// Replaces the message under `handle` with a failure message.
    fn fail(&mut self, handle: &NotificationHandle, message: &str);
}
