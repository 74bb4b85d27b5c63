//! Result sinks.

use sentiment_core::{OutputFormat, Result, SentimentResult, SequenceNumber};
use serde::Serialize;
use std::io::{self, Write};

/// Consumes classified results in arrival order.
pub trait Sink {
    fn consume(&mut self, sequence_number: SequenceNumber, result: &SentimentResult) -> Result<()>;
}

#[derive(Serialize)]
struct JsonLine<'a> {
    seq: SequenceNumber,
    label: &'static str,
    polarity: f64,
    text: &'a str,
}

/// Writes one line per result and flushes it immediately.
pub struct ConsoleSink<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl ConsoleSink<io::Stdout> {
    /// Sink writing to standard output.
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for ConsoleSink<W> {
    fn consume(&mut self, sequence_number: SequenceNumber, result: &SentimentResult) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.writer, "#{} {}: {}", sequence_number, result.label, result.text)?;
            }
            OutputFormat::Json => {
                let line = JsonLine {
                    seq: sequence_number,
                    label: result.label.as_str(),
                    polarity: result.polarity,
                    text: &result.text,
                };
                serde_json::to_writer(&mut self.writer, &line)?;
                self.writer.write_all(b"\n")?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every result in memory.
#[derive(Debug, Default)]
pub struct CollectSink {
    results: Vec<(SequenceNumber, SentimentResult)>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results in arrival order.
    pub fn results(&self) -> &[(SequenceNumber, SentimentResult)] {
        &self.results
    }

    pub fn into_results(self) -> Vec<(SequenceNumber, SentimentResult)> {
        self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl Sink for CollectSink {
    fn consume(&mut self, sequence_number: SequenceNumber, result: &SentimentResult) -> Result<()> {
        self.results.push((sequence_number, result.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment_core::SentimentLabel;

    fn make_result(label: SentimentLabel, text: &str, polarity: f64) -> SentimentResult {
        SentimentResult {
            label,
            text: text.to_string(),
            polarity,
        }
    }

    #[test]
    fn test_text_format() {
        let mut sink = ConsoleSink::new(Vec::new(), OutputFormat::Text);
        sink.consume(1, &make_result(SentimentLabel::Positive, "I love rustlang check", 0.5))
            .unwrap();
        sink.consume(2, &make_result(SentimentLabel::Neutral, "meh", 0.0)).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "#1 positive: I love rustlang check\n#2 neutral: meh\n");
    }

    #[test]
    fn test_json_format() {
        let mut sink = ConsoleSink::new(Vec::new(), OutputFormat::Json);
        sink.consume(7, &make_result(SentimentLabel::Negative, "so bad", -0.7)).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(value["seq"], 7);
        assert_eq!(value["label"], "negative");
        assert_eq!(value["text"], "so bad");
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_collect_sink_keeps_order() {
        let mut sink = CollectSink::new();
        for seq in 1..=3 {
            sink.consume(seq, &make_result(SentimentLabel::Neutral, "x", 0.0)).unwrap();
        }
        let seqs: Vec<u64> = sink.results().iter().map(|(s, _)| *s).collect();
        assert_eq!(seqs, vec![1, 2, 3]);
        assert_eq!(sink.len(), 3);
    }
}
