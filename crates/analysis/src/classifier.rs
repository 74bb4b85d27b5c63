//! Sentiment classification from a polarity score.

use crate::lexicon::{LexiconScorer, PolarityScorer};
use sentiment_core::{SentimentLabel, SentimentResult};

/// Assigns a coarse sentiment label to normalized text.
///
/// The text is passed through unchanged alongside the label.
pub struct SentimentClassifier<S = LexiconScorer> {
    scorer: S,
}

impl Default for SentimentClassifier<LexiconScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier<LexiconScorer> {
    /// Create a classifier backed by the built-in lexicon.
    pub fn new() -> Self {
        Self {
            scorer: LexiconScorer::new(),
        }
    }
}

impl<S: PolarityScorer> SentimentClassifier<S> {
    /// Create a classifier backed by a custom scorer.
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Classify a normalized text.
    pub fn classify(&self, text: String) -> SentimentResult {
        let polarity = self.scorer.polarity(&text);
        SentimentResult {
            label: SentimentLabel::from_polarity(polarity),
            text,
            polarity,
        }
    }
}
