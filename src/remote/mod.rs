pub mod graphql;
pub mod provider;
pub mod queries;
pub mod types;

pub use graphql::GraphqlClient;
pub use provider::{RemoteData, RemoteError};
pub use types::{Id, NewPost, Post, Subreddit};
