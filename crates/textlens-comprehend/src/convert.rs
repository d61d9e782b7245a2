//! Conversions from Comprehend response shapes into core result types.
//!
//! Every field the SDK models as optional but the report needs is checked;
//! an absent field is a malformed response, never a panic.

use aws_sdk_comprehend::operation::detect_sentiment::DetectSentimentOutput;
use aws_sdk_comprehend::types as sdk;
use textlens_core::{
    AnalysisError, DetectedLanguage, Entity, KeyPhrase, PiiEntity, Sentiment, SentimentScores,
    SyntaxToken,
};

fn required<T>(value: Option<T>, field: &str) -> Result<T, AnalysisError> {
    value.ok_or_else(|| AnalysisError::MalformedResponse(format!("missing {field}")))
}

fn offset(value: Option<i32>, field: &str) -> Result<usize, AnalysisError> {
    let raw = required(value, field)?;
    usize::try_from(raw)
        .map_err(|_| AnalysisError::MalformedResponse(format!("negative {field}: {raw}")))
}

pub(crate) fn languages(
    items: &[sdk::DominantLanguage],
) -> Result<Vec<DetectedLanguage>, AnalysisError> {
    items
        .iter()
        .map(|lang| {
            let code = required(lang.language_code(), "language code")?;
            Ok(DetectedLanguage {
                code: code.to_string(),
                score: required(lang.score(), "language score")?,
            })
        })
        .collect()
}

pub(crate) fn sentiment(output: &DetectSentimentOutput) -> Result<Sentiment, AnalysisError> {
    let label = required(output.sentiment(), "sentiment")?;
    let scores = required(output.sentiment_score(), "sentiment score")?;
    Ok(Sentiment {
        label: label.as_str().to_string(),
        scores: SentimentScores {
            positive: required(scores.positive(), "positive score")?,
            negative: required(scores.negative(), "negative score")?,
            neutral: required(scores.neutral(), "neutral score")?,
            mixed: required(scores.mixed(), "mixed score")?,
        },
    })
}

pub(crate) fn entities(items: &[sdk::Entity]) -> Result<Vec<Entity>, AnalysisError> {
    items
        .iter()
        .map(|entity| {
            let kind = required(entity.r#type(), "entity type")?;
            Ok(Entity {
                kind: kind.as_str().to_string(),
                text: required(entity.text(), "entity text")?.to_string(),
                score: required(entity.score(), "entity score")?,
            })
        })
        .collect()
}

pub(crate) fn key_phrases(items: &[sdk::KeyPhrase]) -> Result<Vec<KeyPhrase>, AnalysisError> {
    items
        .iter()
        .map(|phrase| {
            Ok(KeyPhrase {
                text: required(phrase.text(), "key phrase text")?.to_string(),
                score: required(phrase.score(), "key phrase score")?,
            })
        })
        .collect()
}

pub(crate) fn pii_entities(items: &[sdk::PiiEntity]) -> Result<Vec<PiiEntity>, AnalysisError> {
    items
        .iter()
        .map(|entity| {
            let kind = required(entity.r#type(), "PII type")?;
            Ok(PiiEntity {
                kind: kind.as_str().to_string(),
                begin: offset(entity.begin_offset(), "begin offset")?,
                end: offset(entity.end_offset(), "end offset")?,
                score: required(entity.score(), "PII score")?,
            })
        })
        .collect()
}

pub(crate) fn syntax_tokens(
    items: &[sdk::SyntaxToken],
) -> Result<Vec<SyntaxToken>, AnalysisError> {
    items
        .iter()
        .map(|token| {
            let pos = required(token.part_of_speech(), "part of speech")?;
            let tag = required(pos.tag(), "part of speech tag")?;
            Ok(SyntaxToken {
                text: required(token.text(), "token text")?.to_string(),
                tag: tag.as_str().to_string(),
            })
        })
        .collect()
}
