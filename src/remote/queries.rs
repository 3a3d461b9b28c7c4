//! GraphQL documents sent to the backend.
//!
//! Field names follow the backend schema (`snake_case` columns); the Rust
//! types in [`super::types`] mirror them one to one.

pub const GET_SUBREDDIT_BY_TOPIC: &str = r#"
query getSubredditListByTopic($topic: String!) {
  getSubredditListByTopic(topic: $topic) {
    id
    topic
    created_at
  }
}
"#;

pub const ADD_SUBREDDIT: &str = r#"
mutation insertSubreddit($topic: String!) {
  insertSubreddit(topic: $topic) {
    id
    topic
    created_at
  }
}
"#;

pub const ADD_POST: &str = r#"
mutation insertPost(
  $body: String!
  $image: String!
  $subreddit_id: ID!
  $title: String!
  $username: String!
) {
  insertPost(
    body: $body
    image: $image
    subreddit_id: $subreddit_id
    title: $title
    username: $username
  ) {
    id
    title
    body
    image
    subreddit_id
    username
    created_at
  }
}
"#;

pub const GET_ALL_POST: &str = r#"
query getPostList {
  getPostList {
    id
    title
    body
    image
    subreddit_id
    username
    created_at
  }
}
"#;
