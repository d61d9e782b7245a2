//! AWS Comprehend backend for [`TextAnalyzer`].

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_comprehend::Client;
use aws_sdk_comprehend::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_comprehend::types::{LanguageCode as SdkLanguageCode, SyntaxLanguageCode};
use textlens_core::{
    AnalysisError, DetectedLanguage, Entity, KeyPhrase, LanguageCode, PiiEntity, Sentiment,
    SyntaxToken, TextAnalyzer,
};
use tracing::debug;

use crate::convert;

/// Comprehend client handle.
///
/// Built once from a resolved [`SdkConfig`] and shared by reference for the
/// whole run. Construction does no I/O.
#[derive(Debug, Clone)]
pub struct ComprehendAnalyzer {
    client: Client,
}

impl ComprehendAnalyzer {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

fn call_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> AnalysisError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let code = err.code().map(str::to_string);
    let message = match err.message() {
        Some(message) => message.to_string(),
        None => DisplayErrorContext(&err).to_string(),
    };
    debug!(operation, code = ?code, "comprehend call failed");
    AnalysisError::from_code(code.as_deref(), message)
}

fn sdk_language(language: &LanguageCode) -> SdkLanguageCode {
    SdkLanguageCode::from(language.as_str())
}

#[async_trait]
impl TextAnalyzer for ComprehendAnalyzer {
    async fn detect_language(&self, text: &str) -> Result<Vec<DetectedLanguage>, AnalysisError> {
        let output = self
            .client
            .detect_dominant_language()
            .text(text)
            .send()
            .await
            .map_err(|e| call_error("detect_dominant_language", e))?;
        convert::languages(output.languages())
    }

    async fn detect_sentiment(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Sentiment, AnalysisError> {
        let output = self
            .client
            .detect_sentiment()
            .text(text)
            .language_code(sdk_language(language))
            .send()
            .await
            .map_err(|e| call_error("detect_sentiment", e))?;
        convert::sentiment(&output)
    }

    async fn detect_entities(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Vec<Entity>, AnalysisError> {
        let output = self
            .client
            .detect_entities()
            .text(text)
            .language_code(sdk_language(language))
            .send()
            .await
            .map_err(|e| call_error("detect_entities", e))?;
        convert::entities(output.entities())
    }

    async fn detect_key_phrases(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Vec<KeyPhrase>, AnalysisError> {
        let output = self
            .client
            .detect_key_phrases()
            .text(text)
            .language_code(sdk_language(language))
            .send()
            .await
            .map_err(|e| call_error("detect_key_phrases", e))?;
        convert::key_phrases(output.key_phrases())
    }

    async fn detect_pii(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Vec<PiiEntity>, AnalysisError> {
        let output = self
            .client
            .detect_pii_entities()
            .text(text)
            .language_code(sdk_language(language))
            .send()
            .await
            .map_err(|e| call_error("detect_pii_entities", e))?;
        convert::pii_entities(output.entities())
    }

    async fn detect_syntax(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Vec<SyntaxToken>, AnalysisError> {
        // Syntax has its own, narrower language enum.
        let output = self
            .client
            .detect_syntax()
            .text(text)
            .language_code(SyntaxLanguageCode::from(language.as_str()))
            .send()
            .await
            .map_err(|e| call_error("detect_syntax", e))?;
        convert::syntax_tokens(output.syntax_tokens())
    }
}
