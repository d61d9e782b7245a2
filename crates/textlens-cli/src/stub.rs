//! In-memory `TextAnalyzer` for dispatcher tests.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use textlens_core::{
    AnalysisError, DetectedLanguage, Entity, KeyPhrase, LanguageCode, Operation, PiiEntity,
    Sentiment, SentimentScores, SyntaxToken, TextAnalyzer,
};

/// One recorded call: operation, text, and language code when one was sent.
pub type Call = (Operation, String, Option<String>);

/// Returns canned results and records every call it receives.
pub struct StubAnalyzer {
    pub calls: Mutex<Vec<Call>>,
    pub failing: HashSet<Operation>,
    pub languages: Vec<DetectedLanguage>,
    pub sentiment: Sentiment,
    pub entities: Vec<Entity>,
    pub key_phrases: Vec<KeyPhrase>,
    pub pii: Vec<PiiEntity>,
    pub syntax: Vec<SyntaxToken>,
}

impl Default for StubAnalyzer {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: HashSet::new(),
            languages: vec![DetectedLanguage {
                code: "en".into(),
                score: 0.99,
            }],
            sentiment: Sentiment {
                label: "NEUTRAL".into(),
                scores: SentimentScores {
                    positive: 0.1,
                    negative: 0.1,
                    neutral: 0.7,
                    mixed: 0.1,
                },
            },
            entities: Vec::new(),
            key_phrases: vec![KeyPhrase {
                text: "the weather".into(),
                score: 0.95,
            }],
            pii: Vec::new(),
            syntax: vec![SyntaxToken {
                text: "The".into(),
                tag: "DET".into(),
            }],
        }
    }
}

impl StubAnalyzer {
    pub fn failing(mut self, op: Operation) -> Self {
        self.failing.insert(op);
        self
    }

    pub fn recorded(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn call<T: Clone>(
        &self,
        op: Operation,
        text: &str,
        language: Option<&LanguageCode>,
        value: &T,
    ) -> Result<T, AnalysisError> {
        let language = language.map(|code| code.to_string());
        let call = (op, text.to_string(), language);
        self.calls.lock().unwrap().push(call);
        if self.failing.contains(&op) {
            return Err(AnalysisError::Throttled("Rate exceeded".into()));
        }
        Ok(value.clone())
    }
}

#[async_trait]
impl TextAnalyzer for StubAnalyzer {
    async fn detect_language(&self, text: &str) -> Result<Vec<DetectedLanguage>, AnalysisError> {
        self.call(Operation::Language, text, None, &self.languages)
    }

    async fn detect_sentiment(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Sentiment, AnalysisError> {
        self.call(Operation::Sentiment, text, Some(language), &self.sentiment)
    }

    async fn detect_entities(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Vec<Entity>, AnalysisError> {
        self.call(Operation::Entities, text, Some(language), &self.entities)
    }

    async fn detect_key_phrases(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Vec<KeyPhrase>, AnalysisError> {
        self.call(
            Operation::KeyPhrases,
            text,
            Some(language),
            &self.key_phrases,
        )
    }

    async fn detect_pii(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Vec<PiiEntity>, AnalysisError> {
        self.call(Operation::Pii, text, Some(language), &self.pii)
    }

    async fn detect_syntax(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Vec<SyntaxToken>, AnalysisError> {
        self.call(Operation::Syntax, text, Some(language), &self.syntax)
    }
}
