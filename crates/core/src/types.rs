//! Core data types for the stream-sentiment system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequence number assigned to a record at ingestion (1-based).
pub type SequenceNumber = u64;

/// One ingested unit of text.
///
/// Created by the stream source for each non-empty line and dropped once it
/// has passed through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Monotonic sequence number, starting at 1.
    pub sequence_number: SequenceNumber,
    /// Text payload as received.
    pub raw_text: String,
}

impl Record {
    /// Create a new record.
    pub fn new(sequence_number: SequenceNumber, raw_text: impl Into<String>) -> Self {
        Self {
            sequence_number,
            raw_text: raw_text.into(),
        }
    }
}

/// Coarse sentiment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Polarity above zero.
    Positive,
    /// Polarity exactly zero.
    Neutral,
    /// Polarity below zero.
    Negative,
}

impl SentimentLabel {
    /// Map a polarity score to a label using strict thresholds.
    ///
    /// `0.0` (and `-0.0`) is neutral. NaN carries no direction and is
    /// treated as neutral too.
    #[inline]
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the classifier for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Assigned label.
    pub label: SentimentLabel,
    /// Normalized text, passed through unchanged.
    pub text: String,
    /// Polarity score the label was derived from.
    pub polarity: f64,
}

impl SentimentResult {
    /// Label and text as a pair.
    pub fn as_pair(&self) -> (&'static str, &str) {
        (self.label.as_str(), &self.text)
    }
}
