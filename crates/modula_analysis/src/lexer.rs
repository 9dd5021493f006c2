//! Splits lines into lexemes and classifies them into the category catalogue

use crate::context::AnalysisContext;
use crate::error::LexicalError;
use crate::patterns::split_keeping_separators;
use modula_tokens::prelude::*;
use tracing::{debug, trace, trace_span};

pub mod rules;

pub use rules::{classify, Outcome};

/// Splits a line into its non-blank lexemes
pub fn split_line(line: &str) -> Vec<&str> {
    split_keeping_separators(line)
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Classifies every lexeme of every line, emitting token records and collecting lexical errors.
///
/// Every classification advances its category counter, including ones whose record is then
/// suppressed as a duplicate.
pub fn tokenize(ctx: &mut AnalysisContext<'_>) {
    let span = trace_span!("tokenize", lines = ctx.lines().len());
    let _enter = span.enter();

    let AnalysisContext {
        reserved,
        lines,
        counters,
        tokens,
        errors,
        ..
    } = ctx;

    for (index, raw) in lines.iter().enumerate() {
        let line_number = index + 1;
        for lexeme in split_line(raw.trim()) {
            match classify(lexeme, reserved) {
                Outcome::Token(category) => {
                    let code = counters.advance(category);
                    if !tokens.push(TokenRecord::new(lexeme, code)) {
                        trace!(%code, lexeme, "suppressed duplicate token");
                    }
                }
                Outcome::Error(kind) => {
                    let error = LexicalError::new(line_number, lexeme, kind);
                    debug!("{error}");
                    errors.push(error);
                }
            }
        }
    }
    debug!(
        tokens = tokens.len(),
        errors = errors.len(),
        "tokenization finished"
    );
}
