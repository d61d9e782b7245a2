//! Console rendering for analysis outcomes.
//!
//! Every section is a heading, one line per result (or an explicit "nothing
//! found" line), and a trailing blank line. Failed calls render a single
//! `Error: ...` line in place of the results.

use std::io::{self, Write};

use textlens_core::{
    Analysis, AnalysisError, DetectedLanguage, Entity, KeyPhrase, Operation, PiiEntity, Sentiment,
    SyntaxToken,
};

/// Syntax output is cut to this many tokens.
const SYNTAX_PREVIEW: usize = 5;

const SEPARATOR: &str = "----------------------------------------";

// ── Framing ──

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "🔍 AWS Comprehend Demo - Text Analysis")?;
    writeln!(out, "=====================================")?;
    writeln!(out)
}

pub fn write_text_header<W: Write>(out: &mut W, number: usize, text: &str) -> io::Result<()> {
    writeln!(out, "📝 Sample Text {number}:")?;
    writeln!(out, "{text}")?;
    writeln!(out)
}

pub fn write_separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)
}

pub fn heading(op: Operation) -> &'static str {
    match op {
        Operation::Language => "🌍 Language Detection:",
        Operation::Sentiment => "😊 Sentiment Analysis:",
        Operation::Entities => "🏷️  Entity Detection:",
        Operation::KeyPhrases => "🔑 Key Phrases:",
        Operation::Pii => "🔒 PII Detection:",
        Operation::Syntax => "📝 Syntax Analysis (First 5 tokens):",
    }
}

/// Confidence as a percentage with two decimals: `0.9534` → `95.34%`.
pub fn percent(score: f32) -> String {
    format!("{:.2}%", f64::from(score) * 100.0)
}

// ── Sections ──

/// Render one operation's section. `text` is the analysed input, needed to
/// recover PII spans from their offsets.
pub fn write_outcome<W: Write>(
    out: &mut W,
    op: Operation,
    text: &str,
    outcome: &Result<Analysis, AnalysisError>,
) -> io::Result<()> {
    writeln!(out, "{}", heading(op))?;
    match outcome {
        Ok(analysis) => write_analysis(out, text, analysis)?,
        Err(err) => writeln!(out, "Error: {err}")?,
    }
    writeln!(out)
}

fn write_analysis<W: Write>(out: &mut W, text: &str, analysis: &Analysis) -> io::Result<()> {
    match analysis {
        Analysis::Language(langs) => write_languages(out, langs),
        Analysis::Sentiment(sentiment) => write_sentiment(out, sentiment),
        Analysis::Entities(entities) => write_entities(out, entities),
        Analysis::KeyPhrases(phrases) => write_key_phrases(out, phrases),
        Analysis::Pii(entities) => write_pii(out, text, entities),
        Analysis::Syntax(tokens) => write_syntax(out, tokens),
    }
}

fn write_languages<W: Write>(out: &mut W, langs: &[DetectedLanguage]) -> io::Result<()> {
    if langs.is_empty() {
        return writeln!(out, "  No languages detected");
    }
    for lang in langs {
        writeln!(
            out,
            "  Language: {} (Confidence: {})",
            lang.code,
            percent(lang.score)
        )?;
    }
    Ok(())
}

fn write_sentiment<W: Write>(out: &mut W, sentiment: &Sentiment) -> io::Result<()> {
    let s = &sentiment.scores;
    writeln!(out, "  Sentiment: {}", sentiment.label)?;
    writeln!(
        out,
        "  Positive: {} | Negative: {} | Neutral: {} | Mixed: {}",
        percent(s.positive),
        percent(s.negative),
        percent(s.neutral),
        percent(s.mixed)
    )
}

fn write_entities<W: Write>(out: &mut W, entities: &[Entity]) -> io::Result<()> {
    if entities.is_empty() {
        return writeln!(out, "  No entities found");
    }
    for entity in entities {
        writeln!(
            out,
            "  {}: \"{}\" (Confidence: {})",
            entity.kind,
            entity.text,
            percent(entity.score)
        )?;
    }
    Ok(())
}

fn write_key_phrases<W: Write>(out: &mut W, phrases: &[KeyPhrase]) -> io::Result<()> {
    if phrases.is_empty() {
        return writeln!(out, "  No key phrases found");
    }
    for phrase in phrases {
        writeln!(
            out,
            "  \"{}\" (Confidence: {})",
            phrase.text,
            percent(phrase.score)
        )?;
    }
    Ok(())
}

fn write_pii<W: Write>(out: &mut W, text: &str, entities: &[PiiEntity]) -> io::Result<()> {
    if entities.is_empty() {
        return writeln!(out, "  No PII found");
    }
    for entity in entities {
        let kind = &entity.kind;
        let confidence = percent(entity.score);
        match entity.matched(text) {
            Some(span) => writeln!(out, "  {kind}: \"{span}\" (Confidence: {confidence})")?,
            None => {
                let (begin, end) = (entity.begin, entity.end);
                writeln!(
                    out,
                    "  {kind}: <offsets {begin}..{end} out of range> (Confidence: {confidence})"
                )?;
            }
        }
    }
    Ok(())
}

fn write_syntax<W: Write>(out: &mut W, tokens: &[SyntaxToken]) -> io::Result<()> {
    if tokens.is_empty() {
        return writeln!(out, "  No tokens found");
    }
    for token in tokens.iter().take(SYNTAX_PREVIEW) {
        writeln!(out, "  \"{}\" -> {}", token.text, token.tag)?;
    }
    if tokens.len() > SYNTAX_PREVIEW {
        let rest = tokens.len() - SYNTAX_PREVIEW;
        writeln!(out, "  ... and {rest} more tokens")?;
    }
    Ok(())
}
