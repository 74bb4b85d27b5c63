//! Stream line to record decoding.
//!
//! Assigns sequence numbers and applies the malformed-line policy.

use sentiment_core::{Error, MalformedPolicy, Record, Result, SequenceNumber};
use serde::Deserialize;
use tracing::{debug, warn};

/// Wire envelope: `{"data": {"text": "..."}}`. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: EnvelopeData,
}

#[derive(Debug, Deserialize)]
struct EnvelopeData {
    text: String,
}

/// Decoding counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecoderStats {
    /// Records emitted.
    pub records: u64,
    /// Empty keepalive lines dropped.
    pub heartbeats: u64,
    /// Malformed lines dropped under [`MalformedPolicy::Skip`].
    pub skipped: u64,
}

/// Turns raw stream lines into numbered records.
#[derive(Debug)]
pub struct RecordDecoder {
    next_sequence: SequenceNumber,
    policy: MalformedPolicy,
    stats: DecoderStats,
}

impl Default for RecordDecoder {
    fn default() -> Self {
        Self::new(MalformedPolicy::default())
    }
}

impl RecordDecoder {
    /// Create a decoder. Numbering starts at 1.
    pub fn new(policy: MalformedPolicy) -> Self {
        Self {
            next_sequence: 1,
            policy,
            stats: DecoderStats::default(),
        }
    }

    /// Decode one line.
    ///
    /// Returns `Ok(None)` for heartbeats and for skipped malformed lines;
    /// neither consumes a sequence number.
    pub fn decode(&mut self, line: &[u8]) -> Result<Option<Record>> {
        if line.iter().all(|b| b.is_ascii_whitespace()) {
            self.stats.heartbeats += 1;
            debug!("Heartbeat");
            return Ok(None);
        }

        let envelope: Envelope = match serde_json::from_slice(line) {
            Ok(envelope) => envelope,
            Err(e) => {
                let raw = String::from_utf8_lossy(line).into_owned();
                return match self.policy {
                    MalformedPolicy::Fatal => Err(Error::malformed(raw, e.to_string())),
                    MalformedPolicy::Skip => {
                        self.stats.skipped += 1;
                        warn!(line = %raw, error = %e, "Skipping malformed record");
                        Ok(None)
                    }
                };
            }
        };

        let record = Record::new(self.next_sequence, envelope.data.text);
        self.next_sequence += 1;
        self.stats.records += 1;
        Ok(Some(record))
    }

    /// Sequence number the next record will receive.
    pub fn next_sequence(&self) -> SequenceNumber {
        self.next_sequence
    }

    /// Decoding counters.
    pub fn stats(&self) -> &DecoderStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> Vec<u8> {
        serde_json::json!({ "data": { "id": "1", "text": text } })
            .to_string()
            .into_bytes()
    }

    #[test]
    fn test_extracts_nested_text() {
        let mut decoder = RecordDecoder::default();
        let record = decoder.decode(&line("hello world")).unwrap().unwrap();
        assert_eq!(record, Record::new(1, "hello world"));
    }

    #[test]
    fn test_empty_lines_do_not_consume_numbers() {
        let mut decoder = RecordDecoder::default();
        let inputs = [line("a"), line("b"), Vec::new(), b"  ".to_vec(), line("c")];

        let numbers: Vec<u64> = inputs
            .iter()
            .filter_map(|l| decoder.decode(l).unwrap())
            .map(|r| r.sequence_number)
            .collect();

        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(decoder.stats().heartbeats, 2);
        assert_eq!(decoder.next_sequence(), 4);
    }

    #[test]
    fn test_malformed_is_fatal_by_default() {
        let mut decoder = RecordDecoder::default();
        let err = decoder.decode(b"not json").unwrap_err();
        match err {
            Error::MalformedRecord { line, .. } => assert_eq!(line, "not json"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(decoder.next_sequence(), 1);
    }

    #[test]
    fn test_missing_text_field_is_malformed() {
        let mut decoder = RecordDecoder::default();
        let err = decoder.decode(br#"{"data":{"id":"42"}}"#).unwrap_err();
        assert!(err.is_malformed_record());
        let err = decoder.decode(br#"{"errors":[{"title":"x"}]}"#).unwrap_err();
        assert!(err.is_malformed_record());
    }

    #[test]
    fn test_skip_policy_keeps_numbering_contiguous() {
        let mut decoder = RecordDecoder::new(MalformedPolicy::Skip);
        assert_eq!(decoder.decode(&line("first")).unwrap().unwrap().sequence_number, 1);
        assert!(decoder.decode(b"not json").unwrap().is_none());
        assert_eq!(decoder.decode(&line("second")).unwrap().unwrap().sequence_number, 2);
        assert_eq!(decoder.stats().skipped, 1);
        assert_eq!(decoder.stats().records, 2);
    }
}
