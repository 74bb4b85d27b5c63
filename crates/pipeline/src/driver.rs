//! Pipeline driver.
//!
//! Pulls one record at a time from the source and pushes it through the
//! normalizer, the classifier, and the sink before pulling the next.

use crate::sink::Sink;
use crate::stats::PipelineStats;
use sentiment_analysis::{LexiconScorer, PolarityScorer, SentimentClassifier, TextNormalizer};
use sentiment_core::{Record, Result, SentimentResult};
use sentiment_ingestion::StreamSource;
use std::future::Future;
use tracing::{debug, info};

/// Single-worker, strictly sequential record pipeline.
pub struct Pipeline<S = LexiconScorer> {
    normalizer: TextNormalizer,
    classifier: SentimentClassifier<S>,
    max_records: Option<u64>,
}

impl Pipeline<LexiconScorer> {
    /// Standard normalizer with the built-in lexicon classifier.
    pub fn standard() -> Result<Self> {
        Ok(Self::new(TextNormalizer::standard()?, SentimentClassifier::new()))
    }
}

impl<S: PolarityScorer> Pipeline<S> {
    pub fn new(normalizer: TextNormalizer, classifier: SentimentClassifier<S>) -> Self {
        Self {
            normalizer,
            classifier,
            max_records: None,
        }
    }

    /// Stop after `max` records.
    pub fn with_max_records(mut self, max: Option<u64>) -> Self {
        self.max_records = max;
        self
    }

    /// Normalize and classify one record.
    pub fn process(&self, record: &Record) -> SentimentResult {
        let text = self.normalizer.normalize(&record.raw_text);
        self.classifier.classify(text)
    }

    /// Run until the stream ends, the record limit is hit, or an error occurs.
    pub async fn run<K: Sink>(&self, source: &mut StreamSource, sink: &mut K) -> Result<PipelineStats> {
        self.run_until(source, sink, std::future::pending()).await
    }

    /// Like [`run`](Self::run), but also stops when `shutdown` completes.
    ///
    /// Shutdown is only observed while waiting for the next record, so a
    /// record is never left half-processed.
    pub async fn run_until<K, F>(
        &self,
        source: &mut StreamSource,
        sink: &mut K,
        shutdown: F,
    ) -> Result<PipelineStats>
    where
        K: Sink,
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut stats = PipelineStats::new();
        info!(stages = ?self.normalizer.stage_names(), max_records = ?self.max_records, "Pipeline started");

        loop {
            if let Some(max) = self.max_records {
                if stats.records >= max {
                    info!(max, "Record limit reached");
                    break;
                }
            }

            let next = tokio::select! {
                next = source.next_record() => next,
                _ = &mut shutdown => {
                    info!("Shutdown requested");
                    break;
                }
            };

            let record = match next {
                Ok(Some(record)) => record,
                Ok(None) => {
                    info!("Stream ended");
                    break;
                }
                Err(e) => {
                    stats.finish(source.stats());
                    info!(records = stats.records, error = %e, "Pipeline stopped on error");
                    return Err(e);
                }
            };

            let result = self.process(&record);
            debug!(
                seq = record.sequence_number,
                label = %result.label,
                polarity = result.polarity,
                text = %result.text,
                "Classified record"
            );
            sink.consume(record.sequence_number, &result)?;
            stats.record(record.sequence_number, result.label);
        }

        stats.finish(source.stats());
        info!(
            records = stats.records,
            positive = stats.positive,
            neutral = stats.neutral,
            negative = stats.negative,
            heartbeats = stats.heartbeats,
            skipped = stats.skipped,
            "Pipeline finished"
        );
        Ok(stats)
    }
}
