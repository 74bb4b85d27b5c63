//! Lexicon-based polarity scoring.
//!
//! Word-level polarity lookup with negation flipping and intensifier
//! scaling. The text score is the mean of the matched word scores, clamped
//! to [-1, 1]. Text with no matched words scores exactly 0.0.

use std::collections::{HashMap, HashSet};

/// Produces a polarity score in [-1.0, 1.0] for a piece of text.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Tails left behind when apostrophes are cleaned out ("don't" -> "don t").
/// They neither score nor reset a pending modifier.
const CONTRACTION_TAILS: &[&str] = &["t", "s", "ll", "ve", "re"];

/// General-purpose English polarity lexicon.
pub struct LexiconScorer {
    /// Word to polarity mapping.
    words: HashMap<String, f64>,
    /// Words that flip the next sentiment word.
    negations: HashSet<String>,
    /// Words that scale the next sentiment word.
    intensifiers: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Create a scorer with the built-in word list.
    pub fn new() -> Self {
        let positive_words = [
            ("love", 0.5),
            ("loved", 0.7),
            ("lovely", 0.5),
            ("good", 0.7),
            ("great", 0.8),
            ("excellent", 1.0),
            ("awesome", 1.0),
            ("amazing", 0.6),
            ("wonderful", 1.0),
            ("fantastic", 0.4),
            ("perfect", 1.0),
            ("best", 1.0),
            ("better", 0.5),
            ("nice", 0.6),
            ("happy", 0.8),
            ("glad", 0.5),
            ("beautiful", 0.85),
            ("fun", 0.3),
            ("cool", 0.35),
            ("enjoy", 0.4),
            ("fast", 0.2),
            ("win", 0.8),
            ("winning", 0.5),
            ("thanks", 0.2),
            ("helpful", 0.5),
            ("impressive", 1.0),
            ("brilliant", 0.9),
            ("excited", 0.4),
            ("exciting", 0.3),
            ("positive", 0.2),
            ("safe", 0.5),
            ("fixed", 0.1),
        ];

        let negative_words = [
            ("bad", -0.7),
            ("terrible", -1.0),
            ("awful", -1.0),
            ("horrible", -1.0),
            ("hate", -0.8),
            ("hated", -0.9),
            ("worst", -1.0),
            ("worse", -0.4),
            ("sad", -0.5),
            ("angry", -0.5),
            ("poor", -0.4),
            ("boring", -1.0),
            ("ugly", -0.7),
            ("wrong", -0.5),
            ("broken", -0.4),
            ("fail", -0.5),
            ("failed", -0.5),
            ("failure", -0.3),
            ("disappointing", -0.6),
            ("disappointed", -0.75),
            ("annoying", -0.8),
            ("stupid", -0.8),
            ("slow", -0.3),
            ("buggy", -0.5),
            ("crash", -0.6),
            ("useless", -0.5),
            ("painful", -0.7),
            ("scary", -0.5),
            ("negative", -0.3),
            ("lose", -0.4),
            ("losing", -0.4),
            ("unsafe", -0.5),
        ];

        let words = positive_words
            .into_iter()
            .chain(negative_words)
            .map(|(word, score)| (word.to_string(), score))
            .collect();

        let negations = [
            "not", "no", "never", "neither", "nor", "nobody", "nothing", "none",
            "nowhere", "cannot", "cant", "dont", "doesnt", "didnt", "isnt", "arent",
            "wasnt", "werent", "wont", "wouldnt", "shouldnt", "couldnt", "hasnt",
            "havent", "don", "doesn", "didn", "isn", "aren", "wasn", "weren", "won",
            "wouldn", "shouldn", "couldn", "hasn", "haven", "hardly", "barely",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let intensifiers = [
            ("very", 1.3),
            ("really", 1.2),
            ("extremely", 1.5),
            ("super", 1.3),
            ("incredibly", 1.5),
            ("absolutely", 1.4),
            ("totally", 1.3),
            ("slightly", 0.5),
            ("somewhat", 0.7),
            ("kinda", 0.7),
        ]
        .into_iter()
        .map(|(word, mult)| (word.to_string(), mult))
        .collect();

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    /// Get the polarity of a single word.
    pub fn get_score(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Add or replace a word. The score is clamped to [-1, 1].
    pub fn add_word(&mut self, word: &str, score: f64) {
        self.words.insert(word.to_lowercase(), score.clamp(-1.0, 1.0));
    }

    /// Score a text and report which words matched.
    pub fn analyze(&self, text: &str) -> LexiconResult {
        let mut scores: Vec<f64> = Vec::new();
        let mut matched_words: Vec<(String, f64)> = Vec::new();

        let mut negate_next = false;
        let mut intensifier: f64 = 1.0;

        for token in text.split_whitespace() {
            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if word.is_empty() || CONTRACTION_TAILS.contains(&word.as_str()) {
                continue;
            }

            if self.negations.contains(&word) {
                negate_next = true;
                continue;
            }

            if let Some(mult) = self.intensifiers.get(&word) {
                intensifier = *mult;
                continue;
            }

            if let Some(mut score) = self.words.get(&word).copied() {
                if negate_next {
                    score = -score;
                    negate_next = false;
                }
                score *= intensifier;
                intensifier = 1.0;

                scores.push(score);
                matched_words.push((word, score));
            } else {
                negate_next = false;
                intensifier = 1.0;
            }
        }

        let score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };

        LexiconResult {
            score: score.clamp(-1.0, 1.0),
            word_count: scores.len(),
            matched_words,
        }
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        self.analyze(text).score
    }
}

/// Result of lexicon analysis.
#[derive(Debug, Clone)]
pub struct LexiconResult {
    /// Overall polarity (-1 to 1).
    pub score: f64,
    /// Words that matched, with their effective scores.
    pub matched_words: Vec<(String, f64)>,
    /// Number of sentiment words found.
    pub word_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_word_scores() {
        let lexicon = LexiconScorer::new();
        assert!(lexicon.get_score("love").unwrap() > 0.0);
        assert!(lexicon.get_score("Terrible").unwrap() < 0.0);
        assert!(lexicon.get_score("meh").is_none());
    }

    #[test]
    fn test_analyze_positive() {
        let lexicon = LexiconScorer::new();
        let result = lexicon.analyze("I love rustlang check");
        assert_relative_eq!(result.score, 0.5);
        assert_eq!(result.word_count, 1);
        assert_eq!(result.matched_words[0].0, "love");
    }

    #[test]
    fn test_unknown_and_empty_text_score_zero() {
        let lexicon = LexiconScorer::new();
        assert_eq!(lexicon.polarity("meh"), 0.0);
        assert_eq!(lexicon.polarity(""), 0.0);
        assert_eq!(lexicon.polarity("the quick brown fox"), 0.0);
    }

    #[test]
    fn test_analyze_averages_matches() {
        let lexicon = LexiconScorer::new();
        // good 0.7, bad -0.7
        let result = lexicon.analyze("good and bad");
        assert_relative_eq!(result.score, 0.0);
        assert_eq!(result.word_count, 2);
    }

    #[test]
    fn test_negation_handling() {
        let lexicon = LexiconScorer::new();
        assert!(lexicon.polarity("this is good") > 0.0);
        assert!(lexicon.polarity("this is not good") < 0.0);
        // Apostrophe already cleaned out.
        assert!(lexicon.polarity("I don t love it") < 0.0);
    }

    #[test]
    fn test_negation_resets_on_unknown_word() {
        let lexicon = LexiconScorer::new();
        assert!(lexicon.polarity("not today good") > 0.0);
    }

    #[test]
    fn test_intensifier_handling() {
        let lexicon = LexiconScorer::new();
        let normal = lexicon.polarity("this is good");
        let intensified = lexicon.polarity("this is very good");
        assert!(intensified > normal);
        // Clamped to the valid range.
        assert_relative_eq!(lexicon.polarity("extremely excellent"), 1.0);
    }

    #[test]
    fn test_add_word() {
        let mut lexicon = LexiconScorer::new();
        lexicon.add_word("Rustacean", 3.0);
        assert_relative_eq!(lexicon.get_score("rustacean").unwrap(), 1.0);
        assert!(lexicon.polarity("hello rustacean") > 0.0);
    }

    #[test]
    fn test_closure_scorer() {
        let fixed = |_: &str| -0.25;
        assert_relative_eq!(fixed.polarity("anything"), -0.25);
    }
}
