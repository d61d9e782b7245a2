//! Core layer: analysis result types, the six-operation variant type, and the
//! `TextAnalyzer` capability trait that remote backends implement.

pub mod analyzer;
pub mod corpus;
pub mod language;
pub mod operation;
pub mod types;

pub use analyzer::{AnalysisError, TextAnalyzer};
pub use corpus::SAMPLE_TEXTS;
pub use language::{InvalidLanguageCode, LanguageCode};
pub use operation::Operation;
pub use types::{
    Analysis, DetectedLanguage, Entity, KeyPhrase, PiiEntity, Sentiment, SentimentScores,
    SyntaxToken,
};
