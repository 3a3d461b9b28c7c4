//! # Session
//!
//! Read-only view of who is signed in. Authentication itself happens
//! elsewhere; the post box only needs to know whether somebody is there and
//! what name to file posts under.

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
}

pub trait SessionProvider: Send + Sync {
    /// The current user, or `None` when signed out.
    fn current_user(&self) -> Option<User>;

    fn is_signed_in(&self) -> bool {
        self.current_user().is_some()
    }
}

/// A session fixed at start-up, e.g. from the config file.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user: Option<User>,
}

impl StaticSession {
    /// A blank or missing name means signed out.
    pub fn new(username: Option<String>) -> Self {
        let user = username
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .map(|name| User { name });
        Self { user }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}
