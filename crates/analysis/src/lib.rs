//! Text normalization and sentiment classification.
//!
//! This crate handles:
//! - Emoji, mention, and punctuation/URL normalization stages
//! - Lexicon-based polarity scoring
//! - Polarity to label classification

pub mod normalizer;
pub mod lexicon;
pub mod classifier;

pub use normalizer::{Clean, StripEmoji, StripMentions, TextNormalizer, TextStage};
pub use lexicon::{LexiconResult, LexiconScorer, PolarityScorer};
pub use classifier::SentimentClassifier;
