//! Request authentication.

use reqwest::header::USER_AGENT;
use reqwest::RequestBuilder;
use sentiment_core::{Error, Result};
use std::fmt;

/// Attaches credentials to an outbound request.
pub trait RequestDecorator: Send + Sync {
    fn decorate(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Bearer token. `Debug` output is redacted.
#[derive(Clone)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Read the token from an environment variable.
    pub fn from_env(var: &str) -> Result<Self> {
        let token = std::env::var(var)
            .map_err(|_| Error::config(format!("environment variable {var} is not set")))?;
        if token.trim().is_empty() {
            return Err(Error::config(format!("environment variable {var} is empty")));
        }
        Ok(Self(token))
    }

    /// The raw token value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

/// Sets `Authorization: Bearer <token>` and a fixed client identifier.
#[derive(Debug, Clone)]
pub struct BearerAuth {
    token: BearerToken,
    client_id: String,
}

impl BearerAuth {
    pub fn new(token: BearerToken, client_id: impl Into<String>) -> Self {
        Self {
            token,
            client_id: client_id.into(),
        }
    }
}

impl RequestDecorator for BearerAuth {
    fn decorate(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(self.token.expose())
            .header(USER_AGENT, self.client_id.as_str())
    }
}
