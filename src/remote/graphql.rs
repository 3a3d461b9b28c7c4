//! GraphQL-over-HTTP implementation of [`RemoteData`].
//!
//! Every operation is a single `POST` of `{"query", "variables"}` to the
//! configured endpoint. A response counts as successful only if the status is
//! 2xx, the `errors` array is empty and the expected field under `data` is
//! present and non-null.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::remote::queries::{ADD_POST, ADD_SUBREDDIT, GET_ALL_POST, GET_SUBREDDIT_BY_TOPIC};
use crate::remote::types::{GraphQlRequest, GraphQlResponse};
use crate::remote::{NewPost, Post, RemoteData, RemoteError, Subreddit};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GraphqlClient {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl GraphqlClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Result<Self, RemoteError> {
        Self::with_timeout(endpoint, api_key, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        endpoint: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        if reqwest::Url::parse(&endpoint).is_err() {
            return Err(RemoteError::Config(format!("invalid GraphQL endpoint: {endpoint}")));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Config(e.to_string()))?;
        Ok(Self {
            endpoint,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs one operation and extracts `data.<field>`.
    async fn execute<V, T>(&self, query: &str, variables: V, field: &str) -> Result<T, RemoteError>
    where
        V: Serialize + Send,
        T: DeserializeOwned,
    {
        let body = GraphQlRequest { query, variables };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Apikey {key}"));
        }

        debug!("GraphQL request: field={field}");
        let response = request
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = response.status();
        debug!("GraphQL response status for {field}: {status}");
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("GraphQL endpoint error: {} - {}", status.as_u16(), message);
            return Err(RemoteError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: GraphQlResponse<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))?;

        if !envelope.errors.is_empty() {
            let messages: Vec<String> = envelope.errors.into_iter().map(|e| e.message).collect();
            warn!("GraphQL errors for {field}: {messages:?}");
            return Err(RemoteError::GraphQl(messages));
        }

        let value = envelope
            .data
            .and_then(|mut data| data.get_mut(field).map(serde_json::Value::take))
            .filter(|v| !v.is_null())
            .ok_or_else(|| RemoteError::Parse(format!("response has no data.{field}")))?;

        serde_json::from_value(value).map_err(|e| RemoteError::Parse(format!("{field}: {e}")))
    }
}

#[async_trait]
impl RemoteData for GraphqlClient {
    fn name(&self) -> &str {
        "graphql"
    }

    async fn find_subreddits(&self, topic: &str) -> Result<Vec<Subreddit>, RemoteError> {
        let found: Vec<Subreddit> = self
            .execute(
                GET_SUBREDDIT_BY_TOPIC,
                json!({ "topic": topic }),
                "getSubredditListByTopic",
            )
            .await?;
        debug!("Found {} subreddit(s) for topic {topic:?}", found.len());
        Ok(found)
    }

    async fn create_subreddit(&self, topic: &str) -> Result<Subreddit, RemoteError> {
        let created: Subreddit = self
            .execute(ADD_SUBREDDIT, json!({ "topic": topic }), "insertSubreddit")
            .await?;
        info!("Created subreddit r/{} (id={})", created.topic, created.id);
        Ok(created)
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, RemoteError> {
        let created: Post = self.execute(ADD_POST, post, "insertPost").await?;
        info!("Created post id={} in subreddit {}", created.id, created.subreddit_id);
        Ok(created)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, RemoteError> {
        self.execute(GET_ALL_POST, json!({}), "getPostList").await
    }
}
