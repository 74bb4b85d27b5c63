//! Error types for the stream-sentiment system.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the stream-sentiment system.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The stream handshake did not return 200 OK.
    #[error("Cannot get stream (HTTP {status}): {body}")]
    Connection { status: u16, body: String },

    /// Rule registration did not return 201 Created.
    #[error("Cannot add rules (HTTP {status}): {body}")]
    RuleRegistration { status: u16, body: String },

    /// A non-empty stream line that is not a valid record.
    #[error("Malformed record ({reason}): {line}")]
    MalformedRecord { line: String, reason: String },

    /// A stream line grew past the configured limit.
    #[error("Stream line exceeds {limit} bytes")]
    LineTooLong { limit: usize },

    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// No data arrived within the read timeout.
    #[error("Timed out: {0}")]
    Timeout(String),

    /// Text pattern compilation error.
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a transport error.
    pub fn http(msg: impl Into<String>) -> Self {
        Error::Http(msg.into())
    }

    /// Create a timeout error.
    pub fn timeout(msg: impl Into<String>) -> Self {
        Error::Timeout(msg.into())
    }

    /// Create a pattern error.
    pub fn pattern(msg: impl Into<String>) -> Self {
        Error::Pattern(msg.into())
    }

    /// Create a malformed record error for a raw stream line.
    pub fn malformed(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedRecord {
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error came from a bad record rather than the transport.
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, Error::MalformedRecord { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_carries_status_and_body() {
        let err = Error::Connection {
            status: 401,
            body: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot get stream (HTTP 401): Unauthorized");
    }

    #[test]
    fn test_malformed_record() {
        let err = Error::malformed("not json", "expected value");
        assert!(err.is_malformed_record());
        assert!(err.to_string().contains("not json"));
        assert!(!Error::http("reset").is_malformed_record());
    }
}
