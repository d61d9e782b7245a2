//! The capability interface the dispatcher drives, and its per-call error.

use async_trait::async_trait;
use thiserror::Error;

use crate::language::LanguageCode;
use crate::types::{DetectedLanguage, Entity, KeyPhrase, PiiEntity, Sentiment, SyntaxToken};

/// Failure of a single analysis call.
///
/// None of these are fatal to a run: the dispatcher reports them in place of
/// the results and moves on.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("request throttled: {0}")]
    Throttled(String),

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("text size limit exceeded: {0}")]
    TextTooLarge(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("service error {code}: {message}")]
    Service { code: String, message: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    /// Classify a provider error by its error code.
    pub fn from_code(code: Option<&str>, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            Some("ThrottlingException" | "TooManyRequestsException") => Self::Throttled(message),
            Some("UnsupportedLanguageException") => Self::UnsupportedLanguage(message),
            Some("TextSizeLimitExceededException") => Self::TextTooLarge(message),
            Some("InvalidRequestException") => Self::InvalidRequest(message),
            Some(code) => Self::Service {
                code: code.to_string(),
                message,
            },
            None => Self::Transport(message),
        }
    }
}

/// Six remote text-analysis capabilities.
///
/// Implementations take `&self` only; a single handle is shared by every call,
/// including calls issued concurrently.
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    async fn detect_language(&self, text: &str) -> Result<Vec<DetectedLanguage>, AnalysisError>;

    async fn detect_sentiment(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Sentiment, AnalysisError>;

    async fn detect_entities(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Vec<Entity>, AnalysisError>;

    async fn detect_key_phrases(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Vec<KeyPhrase>, AnalysisError>;

    async fn detect_pii(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Vec<PiiEntity>, AnalysisError>;

    async fn detect_syntax(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Vec<SyntaxToken>, AnalysisError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_maps_throttling_variants() {
        assert!(matches!(
            AnalysisError::from_code(Some("ThrottlingException"), "slow down"),
            AnalysisError::Throttled(_)
        ));
        assert!(matches!(
            AnalysisError::from_code(Some("TooManyRequestsException"), "slow down"),
            AnalysisError::Throttled(_)
        ));
    }

    #[test]
    fn from_code_maps_input_errors() {
        assert!(matches!(
            AnalysisError::from_code(Some("UnsupportedLanguageException"), "xx"),
            AnalysisError::UnsupportedLanguage(_)
        ));
        assert!(matches!(
            AnalysisError::from_code(Some("TextSizeLimitExceededException"), "big"),
            AnalysisError::TextTooLarge(_)
        ));
        assert!(matches!(
            AnalysisError::from_code(Some("InvalidRequestException"), "bad"),
            AnalysisError::InvalidRequest(_)
        ));
    }

    #[test]
    fn from_code_keeps_unknown_codes() {
        let err = AnalysisError::from_code(Some("InternalServerException"), "boom");
        assert_eq!(
            err.to_string(),
            "service error InternalServerException: boom"
        );
    }

    #[test]
    fn from_code_without_code_is_transport() {
        let err = AnalysisError::from_code(None, "connection reset");
        assert_eq!(err.to_string(), "request failed: connection reset");
    }
}
