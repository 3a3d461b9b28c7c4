use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque record identifier.
///
/// The backend is free to encode ids as JSON strings or numbers; both decode
/// to the same textual form so callers never care which one they got.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Id(pub String);

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Id(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Id(s),
            Raw::Int(n) => Id(n.to_string()),
        })
    }
}

/// A named category posts are filed under.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Subreddit {
    pub id: Id,
    pub topic: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A user-authored post, as returned by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub subreddit_id: Id,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Variables for the create-post mutation.
///
/// Every field is always present on the wire: optional text goes out as `""`,
/// never as `null`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub image: String,
    pub subreddit_id: Id,
    pub username: String,
}

// ============================================================================
// GraphQL envelope
// ============================================================================

#[derive(Serialize, Debug)]
pub(crate) struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Deserialize, Debug)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct GraphQlError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_strings_and_numbers() {
        let s: Id = serde_json::from_str("\"T9\"").unwrap();
        let n: Id = serde_json::from_str("42").unwrap();
        assert_eq!(s, Id::new("T9"));
        assert_eq!(n, Id::new("42"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&Id::new("T1")).unwrap();
        assert_eq!(json, "\"T1\"");
    }

    #[test]
    fn test_post_tolerates_missing_optionals() {
        let post: Post =
            serde_json::from_str(r#"{"id": 7, "title": "Hi", "subreddit_id": 3}"#).unwrap();
        assert_eq!(post.id, Id::new("7"));
        assert_eq!(post.subreddit_id, Id::new("3"));
        assert!(post.body.is_none());
        assert!(post.username.is_none());
    }

    #[test]
    fn test_new_post_sends_empty_strings() {
        let vars = NewPost {
            title: "Hello".to_string(),
            body: String::new(),
            image: String::new(),
            subreddit_id: Id::new("T1"),
            username: "alice".to_string(),
        };
        let value = serde_json::to_value(&vars).unwrap();
        assert_eq!(value["body"], "");
        assert_eq!(value["image"], "");
        assert_eq!(value["subreddit_id"], "T1");
    }

    #[test]
    fn test_response_errors_default_to_empty() {
        let rsp: GraphQlResponse<serde_json::Value> =
            serde_json::from_str(r#"{"data": {"x": 1}}"#).unwrap();
        assert!(rsp.errors.is_empty());
        assert!(rsp.data.is_some());
    }
}
