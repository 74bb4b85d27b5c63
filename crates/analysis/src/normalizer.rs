//! Text normalization stages.
//!
//! Each stage is a pure, total string transform. The standard normalizer
//! applies them in a fixed order: emoji stripping, mention stripping, then
//! cleaning.

use regex::Regex;
use sentiment_core::{Error, Result};

/// Pictographic codepoint ranges removed by [`StripEmoji`].
///
/// Emoticons, symbols & pictographs, transport & map symbols, regional
/// indicator flags, dingbats, and the enclosed alphanumeric span.
const EMOJI_PATTERN: &str = concat!(
    "[",
    r"\x{1F600}-\x{1F64F}",
    r"\x{1F300}-\x{1F5FF}",
    r"\x{1F680}-\x{1F6FF}",
    r"\x{1F1E0}-\x{1F1FF}",
    r"\x{2702}-\x{27B0}",
    r"\x{24C2}-\x{1F251}",
    "]+",
);

const MENTION_PATTERN: &str = r"@\w+";

/// Mentions, anything outside `[0-9A-Za-z \t]`, and URLs.
const CLEAN_PATTERN: &str = r"@[A-Za-z0-9]+|[^0-9A-Za-z \t]|\w+://\S+";

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::pattern(e.to_string()))
}

/// A single normalization stage.
pub trait TextStage: Send + Sync {
    /// Stage name, for logging.
    fn name(&self) -> &'static str;

    /// Apply the transform.
    fn apply(&self, text: &str) -> String;
}

/// Removes pictographic codepoints.
pub struct StripEmoji {
    pattern: Regex,
}

impl StripEmoji {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: compile(EMOJI_PATTERN)?,
        })
    }
}

impl TextStage for StripEmoji {
    fn name(&self) -> &'static str {
        "strip_emoji"
    }

    fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").into_owned()
    }
}

/// Removes `@username` mentions without leaving a replacement token.
pub struct StripMentions {
    pattern: Regex,
}

impl StripMentions {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: compile(MENTION_PATTERN)?,
        })
    }
}

impl TextStage for StripMentions {
    fn name(&self) -> &'static str {
        "strip_mentions"
    }

    fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").into_owned()
    }
}

/// Replaces mentions, punctuation, and URLs with spaces, then collapses
/// whitespace and trims.
pub struct Clean {
    pattern: Regex,
}

impl Clean {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: compile(CLEAN_PATTERN)?,
        })
    }
}

impl TextStage for Clean {
    fn name(&self) -> &'static str {
        "clean"
    }

    fn apply(&self, text: &str) -> String {
        let replaced = self.pattern.replace_all(text, " ");
        replaced.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Ordered list of normalization stages.
pub struct TextNormalizer {
    stages: Vec<Box<dyn TextStage>>,
}

impl TextNormalizer {
    /// The standard order: strip_emoji -> strip_mentions -> clean.
    pub fn standard() -> Result<Self> {
        Ok(Self::with_stages(vec![
            Box::new(StripEmoji::new()?),
            Box::new(StripMentions::new()?),
            Box::new(Clean::new()?),
        ]))
    }

    /// Build a normalizer from a custom ordered list of stages.
    pub fn with_stages(stages: Vec<Box<dyn TextStage>>) -> Self {
        Self { stages }
    }

    /// Stage names in application order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the normalizer has no stages (identity transform).
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run the text through every stage in order.
    pub fn normalize(&self, text: &str) -> String {
        self.stages
            .iter()
            .fold(text.to_string(), |current, stage| stage.apply(&current))
    }

    /// Like [`normalize`](Self::normalize), but keeps each stage's output.
    pub fn normalize_steps(&self, text: &str) -> Vec<(&'static str, String)> {
        let mut steps = Vec::with_capacity(self.stages.len());
        let mut current = text.to_string();
        for stage in &self.stages {
            current = stage.apply(&current);
            steps.push((stage.name(), current.clone()));
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_emoji(text: &str) -> String {
        StripEmoji::new().unwrap().apply(text)
    }

    fn strip_mentions(text: &str) -> String {
        StripMentions::new().unwrap().apply(text)
    }

    fn clean(text: &str) -> String {
        Clean::new().unwrap().apply(text)
    }

    #[test]
    fn test_strip_emoji_removes_pictographs() {
        assert_eq!(strip_emoji("I 😊 love"), "I  love");
        assert_eq!(strip_emoji("go 🚀🚀 now"), "go  now");
        // Regional indicator pair (flag).
        assert_eq!(strip_emoji("hi 🇺🇸!"), "hi !");
        // Dingbat check mark.
        assert_eq!(strip_emoji("done ✔"), "done ");
    }

    #[test]
    fn test_strip_emoji_keeps_other_codepoints() {
        let text = "café #tag @user 100% ok\t\n";
        assert_eq!(strip_emoji(text), text);
        assert_eq!(strip_emoji(""), "");
    }

    #[test]
    fn test_strip_emoji_range_edges() {
        assert_eq!(strip_emoji("\u{1F600}\u{1F64F}"), "");
        assert_eq!(strip_emoji("\u{2702}\u{27B0}"), "");
        assert_eq!(strip_emoji("\u{24C2}\u{1F251}"), "");
        // Just outside the table.
        assert_eq!(strip_emoji("\u{24C1}"), "\u{24C1}");
        assert_eq!(strip_emoji("\u{1F6FF}\u{1F700}"), "\u{1F700}");
    }

    #[test]
    fn test_strip_mentions() {
        assert_eq!(strip_mentions("hi @bob and @alice_99!"), "hi  and !");
        assert_eq!(strip_mentions("email a@b.com"), "email a.com");
        assert_eq!(strip_mentions("lone @ sign"), "lone @ sign");
        assert_eq!(strip_mentions("no mentions"), "no mentions");
        // Handles may contain any Unicode word character.
        assert_eq!(strip_mentions("hi @josé!"), "hi !");
        assert_eq!(strip_mentions("@Ünal_π done"), " done");
    }

    #[test]
    fn test_clean_collapses_and_trims() {
        assert_eq!(clean("  hello,   world!!  "), "hello world");
        assert_eq!(clean("meh."), "meh");
        assert_eq!(clean("tab\tseparated\nlines"), "tab separated lines");
        assert_eq!(clean("!!!"), "");
    }

    #[test]
    fn test_clean_removes_urls_and_mentions() {
        assert_eq!(
            clean("read https://example.com/a?b=1 now @dev"),
            "read now"
        );
        assert_eq!(clean("#rustlang rocks"), "rustlang rocks");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let inputs = [
            "I  love #rustlang!! check http://x.co ",
            "  ünïcödé & symbols <b>bold</b> ",
            "ftp://files.example.org/x @someone 42",
            "",
            "\t\t",
        ];
        for input in inputs {
            let once = clean(input);
            assert_eq!(clean(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_standard_order() {
        let normalizer = TextNormalizer::standard().unwrap();
        assert_eq!(
            normalizer.stage_names(),
            vec!["strip_emoji", "strip_mentions", "clean"]
        );
        assert_eq!(normalizer.len(), 3);
    }

    #[test]
    fn test_normalize_steps_match_each_stage() {
        let normalizer = TextNormalizer::standard().unwrap();
        let steps = normalizer.normalize_steps("I 😊 love #rustlang!! check http://x.co @bob");

        assert_eq!(steps[0], ("strip_emoji", "I  love #rustlang!! check http://x.co @bob".to_string()));
        assert_eq!(steps[1], ("strip_mentions", "I  love #rustlang!! check http://x.co ".to_string()));
        assert_eq!(steps[2], ("clean", "I love rustlang check".to_string()));
    }

    #[test]
    fn test_empty_normalizer_is_identity() {
        let normalizer = TextNormalizer::with_stages(Vec::new());
        assert!(normalizer.is_empty());
        assert_eq!(normalizer.normalize(" as is! "), " as is! ");
    }
}
