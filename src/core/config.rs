//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.postbox/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PostboxConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub graphql: GraphqlConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Pin the form to one subreddit; the topic field is then hidden.
    pub subreddit: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GraphqlConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    pub username: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "http://localhost:5001/api/graphql";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Resolved Config (concrete values where a default exists)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub subreddit: Option<String>,
    pub request_timeout: Duration,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub subreddit: Option<String>,
    pub username: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.postbox/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".postbox").join("config.toml"))
}

/// Load config from `~/.postbox/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PostboxConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PostboxConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PostboxConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<PostboxConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(PostboxConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PostboxConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    // api_key stays out of the log
    debug!(
        "Config: endpoint={:?} username={:?} subreddit={:?}",
        config.graphql.endpoint, config.session.username, config.general.subreddit
    );
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Postbox Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# subreddit = "reactjs"              # Pin the form to one subreddit (or POSTBOX_SUBREDDIT)
# request_timeout_secs = 30

# [graphql]
# endpoint = "http://localhost:5001/api/graphql"   # Or POSTBOX_GRAPHQL_ENDPOINT
# api_key = "..."                                  # Or POSTBOX_API_KEY

# [session]
# username = "alice"                 # Or POSTBOX_USERNAME; unset = signed out
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PostboxConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading the environment through `env`.
pub fn resolve_with_env<F>(config: &PostboxConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Endpoint: CLI → env → config → default
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| env("POSTBOX_GRAPHQL_ENDPOINT"))
        .or_else(|| config.graphql.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_GRAPHQL_ENDPOINT.to_string());

    // API key: env → config
    let api_key = env("POSTBOX_API_KEY").or_else(|| config.graphql.api_key.clone());

    // Username: CLI → env → config (absent = signed out)
    let username = cli
        .username
        .clone()
        .or_else(|| env("POSTBOX_USERNAME"))
        .or_else(|| config.session.username.clone());

    // Pinned subreddit: CLI → env → config
    let subreddit = cli
        .subreddit
        .clone()
        .or_else(|| env("POSTBOX_SUBREDDIT"))
        .or_else(|| config.general.subreddit.clone())
        .filter(|s| !s.trim().is_empty());

    ResolvedConfig {
        endpoint,
        api_key,
        username,
        subreddit,
        request_timeout: Duration::from_secs(
            config
                .general
                .request_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&PostboxConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.endpoint, DEFAULT_GRAPHQL_ENDPOINT);
        assert_eq!(resolved.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
        assert!(resolved.username.is_none());
        assert!(resolved.subreddit.is_none());
        assert!(resolved.api_key.is_none());
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = PostboxConfig {
            graphql: GraphqlConfig {
                endpoint: Some("http://config/graphql".into()),
                api_key: Some("from-config".into()),
            },
            session: SessionConfig {
                username: Some("config-user".into()),
            },
            ..Default::default()
        };
        let env: HashMap<&str, &str> = HashMap::from([
            ("POSTBOX_GRAPHQL_ENDPOINT", "http://env/graphql"),
            ("POSTBOX_API_KEY", "from-env"),
            ("POSTBOX_USERNAME", "env-user"),
        ]);
        let cli = CliOverrides {
            username: Some("cli-user".into()),
            ..Default::default()
        };

        let resolved = resolve_with_env(&config, &cli, |k| env.get(k).map(|v| v.to_string()));

        assert_eq!(resolved.endpoint, "http://env/graphql");
        assert_eq!(resolved.api_key.as_deref(), Some("from-env"));
        assert_eq!(resolved.username.as_deref(), Some("cli-user"));
    }

    #[test]
    fn test_blank_subreddit_means_unpinned() {
        let config = PostboxConfig {
            general: GeneralConfig {
                subreddit: Some("  ".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert!(resolved.subreddit.is_none());
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config: PostboxConfig =
            toml::from_str("[general]\nrequest_timeout_secs = 0\n").unwrap();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(
            resolved.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[general]
subreddit = "reactjs"
request_timeout_secs = 5

[graphql]
endpoint = "https://example.stepzen.net/api/reddit/__graphql"
api_key = "secret"

[session]
username = "alice"
"#;
        let config: PostboxConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.subreddit.as_deref(), Some("reactjs"));
        assert_eq!(config.general.request_timeout_secs, Some(5));
        assert_eq!(config.graphql.api_key.as_deref(), Some("secret"));
        assert_eq!(config.session.username.as_deref(), Some("alice"));

        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: PostboxConfig = toml::from_str("[session]\nusername = \"bob\"\n").unwrap();
        assert_eq!(config.session.username.as_deref(), Some("bob"));
        assert!(config.graphql.endpoint.is_none());
        assert!(config.general.subreddit.is_none());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("postbox-test-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");

        let config = load_config_from(&path).unwrap();

        assert!(config.session.username.is_none());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Postbox Configuration"));
        // The generated file is all comments, so it parses back to defaults.
        assert!(load_config_from(&path).unwrap().graphql.endpoint.is_none());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("postbox-test-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\nsubreddit = ").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
        let _ = fs::remove_dir_all(&dir);
    }
}
