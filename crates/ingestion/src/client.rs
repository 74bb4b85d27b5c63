//! HTTP client for the streaming provider.

use crate::auth::RequestDecorator;
use crate::rules::build_rules_payload;
use crate::source::StreamSource;
use futures::StreamExt;
use reqwest::StatusCode;
use sentiment_core::config::{RulesConfig, StreamConfig};
use sentiment_core::{Error, MalformedPolicy, Result};
use std::time::Duration;
use tracing::info;

/// Connect timeout for both endpoints. The stream itself has no total timeout.
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Opens the record stream and registers stream rules.
pub struct StreamClient<A> {
    http: reqwest::Client,
    config: StreamConfig,
    auth: A,
    policy: MalformedPolicy,
}

impl<A: RequestDecorator> StreamClient<A> {
    /// Create a new client.
    pub fn new(config: StreamConfig, auth: A, policy: MalformedPolicy) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::http(e.to_string()))?;

        Ok(Self {
            http,
            config,
            auth,
            policy,
        })
    }

    /// Replace the underlying HTTP client (proxy or TLS settings).
    pub fn with_http(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Open the stream. Anything other than 200 OK is a connection error.
    pub async fn open(&self) -> Result<StreamSource> {
        info!(url = %self.config.stream_url, "Opening stream");

        let response = self
            .auth
            .decorate(self.http.get(&self.config.stream_url))
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Connection {
                status: status.as_u16(),
                body: error_body(response).await,
            });
        }
        info!(status = status.as_u16(), "Stream connected");

        let chunks = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| Error::http(e.to_string())));

        Ok(StreamSource::from_stream(Box::pin(chunks), self.policy)
            .with_read_timeout(self.config.read_timeout())
            .with_max_line_bytes(self.config.max_line_bytes))
    }

    /// Register search rules. Anything other than 201 Created is an error.
    ///
    /// Returns the provider's JSON response.
    pub async fn add_rules(&self, rules: &RulesConfig) -> Result<serde_json::Value> {
        if rules.search_terms.is_empty() {
            return Err(Error::config("no search terms to register"));
        }

        let payload = build_rules_payload(&rules.search_terms, &rules.filter_clause);
        info!(rules = payload.add.len(), url = %self.config.rules_url, "Registering stream rules");

        let response = self
            .auth
            .decorate(self.http.post(&self.config.rules_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::CREATED {
            return Err(Error::RuleRegistration {
                status: status.as_u16(),
                body: error_body(response).await,
            });
        }

        let body = response.text().await.map_err(|e| Error::http(e.to_string()))?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        info!(response = %value, "Stream rules registered");
        Ok(value)
    }
}

/// Body of a rejected response. A failed read is reported in place of the body.
async fn error_body(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(body) => body,
        Err(e) => format!("<body unavailable: {e}>"),
    }
}
