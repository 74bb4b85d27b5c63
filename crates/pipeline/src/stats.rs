//! Run statistics.

use chrono::{DateTime, Utc};
use sentiment_core::{SentimentLabel, SequenceNumber};
use sentiment_ingestion::DecoderStats;
use serde::Serialize;

/// Counters for one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineStats {
    /// Records pushed to the sink.
    pub records: u64,
    /// Records labelled positive.
    pub positive: u64,
    /// Records labelled neutral.
    pub neutral: u64,
    /// Records labelled negative.
    pub negative: u64,
    /// Keepalive lines seen by the source.
    pub heartbeats: u64,
    /// Malformed lines dropped by the source.
    pub skipped: u64,
    /// Sequence number of the last record delivered.
    pub last_sequence: Option<SequenceNumber>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Default for PipelineStats {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStats {
    /// Start a new run.
    pub fn new() -> Self {
        Self {
            records: 0,
            positive: 0,
            neutral: 0,
            negative: 0,
            heartbeats: 0,
            skipped: 0,
            last_sequence: None,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Count a delivered record.
    pub fn record(&mut self, sequence_number: SequenceNumber, label: SentimentLabel) {
        self.records += 1;
        self.last_sequence = Some(sequence_number);
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    /// Close the run, copying the source's line counters.
    pub fn finish(&mut self, source: &DecoderStats) {
        self.heartbeats = source.heartbeats;
        self.skipped = source.skipped;
        self.finished_at = Some(Utc::now());
    }

    /// Number of records with the given label.
    pub fn count(&self, label: SentimentLabel) -> u64 {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    /// Fraction of records with the given label.
    pub fn fraction(&self, label: SentimentLabel) -> f64 {
        if self.records > 0 {
            self.count(label) as f64 / self.records as f64
        } else {
            0.0
        }
    }

    /// Mean label sign (-1 to 1).
    pub fn net_sentiment(&self) -> f64 {
        if self.records > 0 {
            (self.positive as f64 - self.negative as f64) / self.records as f64
        } else {
            0.0
        }
    }
}
