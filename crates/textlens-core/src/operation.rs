//! The six analysis operations as one variant type.

use tracing::debug;

use crate::analyzer::{AnalysisError, TextAnalyzer};
use crate::language::LanguageCode;
use crate::types::Analysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Language,
    Sentiment,
    Entities,
    KeyPhrases,
    Pii,
    Syntax,
}

impl Operation {
    /// Every operation, in presentation order.
    pub const ALL: [Operation; 6] = [
        Self::Language,
        Self::Sentiment,
        Self::Entities,
        Self::KeyPhrases,
        Self::Pii,
        Self::Syntax,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Language => "detect_dominant_language",
            Self::Sentiment => "detect_sentiment",
            Self::Entities => "detect_entities",
            Self::KeyPhrases => "detect_key_phrases",
            Self::Pii => "detect_pii_entities",
            Self::Syntax => "detect_syntax",
        }
    }

    /// Whether the request carries a language code. Only language detection
    /// goes without one, since the language is what it determines.
    pub fn needs_language(&self) -> bool {
        !matches!(self, Self::Language)
    }

    /// Issue this operation against `analyzer`.
    ///
    /// `language` is ignored for [`Operation::Language`].
    pub async fn run<A>(
        self,
        analyzer: &A,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Analysis, AnalysisError>
    where
        A: TextAnalyzer + ?Sized,
    {
        debug!(operation = self.as_str(), language = %language, chars = text.chars().count(), "invoking analysis");
        match self {
            Self::Language => analyzer.detect_language(text).await.map(Analysis::Language),
            Self::Sentiment => analyzer
                .detect_sentiment(text, language)
                .await
                .map(Analysis::Sentiment),
            Self::Entities => analyzer
                .detect_entities(text, language)
                .await
                .map(Analysis::Entities),
            Self::KeyPhrases => analyzer
                .detect_key_phrases(text, language)
                .await
                .map(Analysis::KeyPhrases),
            Self::Pii => analyzer.detect_pii(text, language).await.map(Analysis::Pii),
            Self::Syntax => analyzer
                .detect_syntax(text, language)
                .await
                .map(Analysis::Syntax),
        }
    }
}
