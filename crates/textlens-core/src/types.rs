//! Analysis result types returned by a [`TextAnalyzer`](crate::TextAnalyzer).
//!
//! These are transient: each is produced by one remote call, rendered once,
//! and dropped.

/// One candidate language from dominant-language detection.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLanguage {
    /// RFC 5646 code, e.g. `en` or `zh-TW`.
    pub code: String,
    pub score: f32,
}

/// Per-class sentiment confidence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SentimentScores {
    pub positive: f32,
    pub negative: f32,
    pub neutral: f32,
    pub mixed: f32,
}

/// Overall sentiment of a text.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentiment {
    /// Provider label: `POSITIVE`, `NEGATIVE`, `NEUTRAL` or `MIXED`.
    pub label: String,
    pub scores: SentimentScores,
}

/// A named entity with the substring the provider matched.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub kind: String,
    pub text: String,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyPhrase {
    pub text: String,
    pub score: f32,
}

/// A span of personally identifiable information.
///
/// The provider reports only offsets; the matched text is recovered from the
/// original input with [`PiiEntity::matched`].
#[derive(Debug, Clone, PartialEq)]
pub struct PiiEntity {
    pub kind: String,
    /// Character offset of the first matched character.
    pub begin: usize,
    /// Character offset one past the last matched character.
    pub end: usize,
    pub score: f32,
}

impl PiiEntity {
    /// Slice `text` at this entity's character offsets.
    ///
    /// Returns `None` when the offsets are reversed or fall outside `text`.
    pub fn matched<'a>(&self, text: &'a str) -> Option<&'a str> {
        if self.begin > self.end {
            return None;
        }
        let start = char_to_byte(text, self.begin)?;
        let end = char_to_byte(text, self.end)?;
        Some(&text[start..end])
    }
}

/// Byte position of the `n`th character, allowing `n == char count`.
fn char_to_byte(text: &str, n: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(n)
}

/// A single token with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxToken {
    pub text: String,
    /// Universal POS tag, e.g. `NOUN`, `PRON`, `PUNCT`.
    pub tag: String,
}

/// Successful output of one [`Operation`](crate::Operation).
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    Language(Vec<DetectedLanguage>),
    Sentiment(Sentiment),
    Entities(Vec<Entity>),
    KeyPhrases(Vec<KeyPhrase>),
    Pii(Vec<PiiEntity>),
    Syntax(Vec<SyntaxToken>),
}

impl Analysis {
    /// Highest-scoring detected language, if this is a language result.
    pub fn dominant_language(&self) -> Option<&DetectedLanguage> {
        match self {
            Self::Language(langs) => langs.iter().max_by(|a, b| a.score.total_cmp(&b.score)),
            _ => None,
        }
    }
}
