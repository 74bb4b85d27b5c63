//! Configuration structures for the stream-sentiment system.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration for the pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Streaming endpoint configuration.
    pub stream: StreamConfig,
    /// Rule registration configuration.
    pub rules: RulesConfig,
    /// Credential configuration.
    pub auth: AuthConfig,
    /// Pipeline behavior configuration.
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parse a configuration from JSON. Missing sections take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check values that would otherwise fail late at connection time.
    pub fn validate(&self) -> Result<()> {
        if self.stream.stream_url.trim().is_empty() {
            return Err(Error::config("stream.stream_url must not be empty"));
        }
        if self.stream.rules_url.trim().is_empty() {
            return Err(Error::config("stream.rules_url must not be empty"));
        }
        if self.stream.client_id.trim().is_empty() {
            return Err(Error::config("stream.client_id must not be empty"));
        }
        if self.stream.read_timeout_secs == Some(0) {
            return Err(Error::config(
                "stream.read_timeout_secs must be positive (set it to null to disable)",
            ));
        }
        if self.stream.max_line_bytes == Some(0) {
            return Err(Error::config(
                "stream.max_line_bytes must be positive (set it to null to disable)",
            ));
        }
        if self.auth.token_env.trim().is_empty() {
            return Err(Error::config("auth.token_env must not be empty"));
        }
        Ok(())
    }
}

/// Streaming endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// URL of the newline-delimited JSON stream.
    pub stream_url: String,
    /// URL of the rule registration endpoint.
    pub rules_url: String,
    /// Client identifier sent as the User-Agent header.
    pub client_id: String,
    /// Idle read timeout in seconds (None = wait forever).
    pub read_timeout_secs: Option<u64>,
    /// Longest accepted stream line in bytes (None = unbounded).
    pub max_line_bytes: Option<usize>,
}

impl StreamConfig {
    /// Idle read timeout as a duration.
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            stream_url: "https://api.twitter.com/2/tweets/search/stream".to_string(),
            rules_url: "https://api.twitter.com/2/tweets/search/stream/rules".to_string(),
            client_id: "v2FilteredStreamRust".to_string(),
            read_timeout_secs: Some(90),
            max_line_bytes: Some(1024 * 1024),
        }
    }
}

/// Rule registration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Search terms to register. Empty means registration is skipped.
    pub search_terms: Vec<String>,
    /// Filter clause appended to every term.
    pub filter_clause: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            search_terms: Vec::new(),
            // Only original posts, English only.
            filter_clause: "-is:retweet lang:en".to_string(),
        }
    }
}

/// Credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Environment variable holding the bearer token.
    pub token_env: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_env: "TWITTER_BEARER_TOKEN".to_string(),
        }
    }
}

/// What to do with a non-empty line that is not a valid record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Stop consuming the stream and surface the error.
    #[default]
    Fatal,
    /// Log and drop the line without consuming a sequence number.
    Skip,
}

/// Console output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `#<seq> <label>: <text>`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Pipeline behavior configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Malformed line handling.
    pub malformed: MalformedPolicy,
    /// Stop after this many records (None = run until the stream ends).
    pub max_records: Option<u64>,
    /// Console output format.
    pub output: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.stream.read_timeout(), Some(Duration::from_secs(90)));
        assert_eq!(config.rules.filter_clause, "-is:retweet lang:en");
        assert_eq!(config.auth.token_env, "TWITTER_BEARER_TOKEN");
        assert_eq!(config.pipeline.malformed, MalformedPolicy::Fatal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json_str(
            r#"{"rules": {"search_terms": ["rustlang"]}, "pipeline": {"malformed": "skip", "output": "json"}}"#,
        )
        .unwrap();
        assert_eq!(config.rules.search_terms, vec!["rustlang".to_string()]);
        assert_eq!(config.rules.filter_clause, "-is:retweet lang:en");
        assert_eq!(config.pipeline.malformed, MalformedPolicy::Skip);
        assert_eq!(config.pipeline.output, OutputFormat::Json);
        assert_eq!(config.stream.client_id, "v2FilteredStreamRust");
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.stream.read_timeout_secs = Some(0);
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.stream.read_timeout_secs = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_max_line_bytes() {
        assert_eq!(Config::default().stream.max_line_bytes, Some(1024 * 1024));

        let config = Config::from_json_str(r#"{"stream": {"max_line_bytes": null}}"#).unwrap();
        assert_eq!(config.stream.max_line_bytes, None);

        let err = Config::from_json_str(r#"{"stream": {"max_line_bytes": 0}}"#).unwrap_err();
        assert!(err.to_string().contains("max_line_bytes"));
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let err = Config::from_json_str(r#"{"stream": {"stream_url": ""}}"#).unwrap_err();
        assert!(err.to_string().contains("stream_url"));
    }
}
