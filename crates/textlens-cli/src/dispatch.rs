//! Analysis dispatcher: runs the six operations over each text and renders
//! the outcomes in a fixed order.

use std::io::{self, Write};

use futures::future::join_all;
use textlens_core::{Analysis, AnalysisError, LanguageCode, Operation, TextAnalyzer};
use tracing::{info, warn};

use crate::display;

/// Language code sent with the five language-dependent operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguagePolicy {
    /// Always send this code, whatever detection finds.
    Fixed(LanguageCode),
    /// Send the top detected language, or `fallback` when detection fails or
    /// finds nothing usable.
    FollowDetected { fallback: LanguageCode },
}

impl Default for LanguagePolicy {
    fn default() -> Self {
        Self::Fixed(LanguageCode::english())
    }
}

#[derive(Debug, Clone, Default)]
pub struct DispatchOptions {
    pub language: LanguagePolicy,
    /// Issue the independent operations of one text together.
    pub concurrent: bool,
}

/// Outcome of one operation on one text.
pub type Outcome = (Operation, Result<Analysis, AnalysisError>);

/// Counts for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub texts: usize,
    pub calls: usize,
    pub failures: usize,
}

pub struct Dispatcher<A> {
    analyzer: A,
    options: DispatchOptions,
}

impl<A: TextAnalyzer> Dispatcher<A> {
    pub fn new(analyzer: A, options: DispatchOptions) -> Self {
        Self { analyzer, options }
    }

    /// Analyse every text in `corpus` and write the report to `out`.
    ///
    /// Per-call failures are rendered and counted; only a failed write to
    /// `out` ends the run early.
    pub async fn run<T, W>(&self, corpus: &[T], out: &mut W) -> io::Result<RunSummary>
    where
        T: AsRef<str>,
        W: Write,
    {
        let mut summary = RunSummary::default();
        display::write_banner(out)?;

        for (i, text) in corpus.iter().enumerate() {
            let text = text.as_ref();
            display::write_text_header(out, i + 1, text)?;

            for (op, outcome) in self.analyze(text).await {
                summary.calls += 1;
                if outcome.is_err() {
                    summary.failures += 1;
                }
                display::write_outcome(out, op, text, &outcome)?;
            }

            display::write_separator(out)?;
            out.flush()?;
            summary.texts += 1;
        }

        info!(
            texts = summary.texts,
            calls = summary.calls,
            failures = summary.failures,
            "analysis run complete"
        );
        Ok(summary)
    }

    /// Run all six operations on `text`, returned in [`Operation::ALL`] order
    /// regardless of completion order.
    pub async fn analyze(&self, text: &str) -> Vec<Outcome> {
        let mut outcomes: Vec<Outcome> = Vec::with_capacity(Operation::ALL.len());

        let language = match &self.options.language {
            LanguagePolicy::Fixed(code) => code.clone(),
            LanguagePolicy::FollowDetected { fallback } => {
                // Detection has to finish before anything else can be sent.
                let detected = self.invoke(Operation::Language, text, fallback).await;
                let language = detected
                    .as_ref()
                    .ok()
                    .and_then(Analysis::dominant_language)
                    .and_then(|lang| lang.code.parse::<LanguageCode>().ok())
                    .unwrap_or_else(|| fallback.clone());
                info!(language = %language, "using detected language");
                outcomes.push((Operation::Language, detected));
                language
            }
        };

        // After detection has run, only the language-dependent operations remain.
        let pending: Vec<Operation> = Operation::ALL
            .into_iter()
            .filter(|op| outcomes.is_empty() || op.needs_language())
            .collect();

        if self.options.concurrent {
            let results =
                join_all(pending.iter().map(|&op| self.invoke(op, text, &language))).await;
            outcomes.extend(pending.into_iter().zip(results));
        } else {
            for op in pending {
                let result = self.invoke(op, text, &language).await;
                outcomes.push((op, result));
            }
        }

        outcomes
    }

    async fn invoke(
        &self,
        op: Operation,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Analysis, AnalysisError> {
        let result = op.run(&self.analyzer, text, language).await;
        if let Err(err) = &result {
            warn!(operation = op.as_str(), error = %err, "analysis call failed");
        }
        result
    }
}
