use std::fmt;

use async_trait::async_trait;

use super::types::{NewPost, Post, Subreddit};

/// Errors that can occur while talking to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteError {
    /// Client misconfigured (bad endpoint URL, unusable API key).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The endpoint answered with a non-2xx status.
    Api { status: u16, message: String },
    /// The GraphQL layer rejected the operation.
    GraphQl(Vec<String>),
    /// Failed to parse the backend's response, or a required field was missing.
    Parse(String),
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Config(msg) => write!(f, "config error: {msg}"),
            RemoteError::Network(msg) => write!(f, "network error: {msg}"),
            RemoteError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            RemoteError::GraphQl(messages) => {
                write!(f, "GraphQL error: {}", messages.join("; "))
            }
            RemoteError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for RemoteError {}

/// The operations the post box needs from the backend.
///
/// Implementations perform exactly one remote round trip per call and never
/// retry; sequencing lives in [`crate::core::workflow`].
#[async_trait]
pub trait RemoteData: Send + Sync {
    /// Returns the name of the backend, for logging.
    fn name(&self) -> &str;

    /// All subreddits whose topic matches `topic`, in backend order. May be empty.
    async fn find_subreddits(&self, topic: &str) -> Result<Vec<Subreddit>, RemoteError>;

    /// Creates a subreddit and returns it with its generated id.
    async fn create_subreddit(&self, topic: &str) -> Result<Subreddit, RemoteError>;

    /// Creates a post under an existing subreddit.
    async fn create_post(&self, post: &NewPost) -> Result<Post, RemoteError>;

    /// The post feed, in backend order.
    async fn list_posts(&self) -> Result<Vec<Post>, RemoteError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_variants() {
        assert_eq!(
            RemoteError::Api { status: 502, message: "Bad Gateway".into() }.to_string(),
            "API error (HTTP 502): Bad Gateway"
        );
        assert_eq!(
            RemoteError::GraphQl(vec!["a".into(), "b".into()]).to_string(),
            "GraphQL error: a; b"
        );
        assert_eq!(RemoteError::Network("refused".into()).to_string(), "network error: refused");
    }
}
