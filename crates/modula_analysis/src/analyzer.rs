//! Runs the three analysis stages over source text

use crate::context::AnalysisContext;
use crate::error::BuildAnalyzerError;
use crate::patterns::IDENTIFIER;
use crate::report::AnalysisReport;
use crate::{lexer, symbols, syntax};
use modula_tokens::prelude::*;
use tracing::{debug, info, info_span};

/// Runs analyses and keeps the latest report until it is cleared.
///
/// Must be configured using an [AnalyzerBuilder].
#[derive(Debug)]
pub struct Analyzer {
    reserved_words: ReservedWords,
    report: AnalysisReport,
}

impl Analyzer {
    /// Creates the default AnalyzerBuilder
    #[inline]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    pub fn reserved_words(&self) -> &ReservedWords {
        &self.reserved_words
    }

    /// Analyzes `source`, replacing the previous report.
    ///
    /// The syntax tree is only built when tokenization found no lexical errors.
    pub fn run(&mut self, source: &str) -> &AnalysisReport {
        let span = info_span!("analyze", bytes = source.len());
        let _enter = span.enter();

        let mut ctx = AnalysisContext::new(&self.reserved_words, source);
        symbols::build_symbol_table(&mut ctx);
        ctx.reset_counters();
        lexer::tokenize(&mut ctx);

        let tree = if ctx.errors().is_empty() {
            Some(syntax::build_tree(ctx.lines().iter().copied()))
        } else {
            info!(
                errors = ctx.errors().len(),
                "lexical errors found, syntax tree not built"
            );
            None
        };
        self.report = ctx.into_report(tree);
        debug!(
            symbols = self.report.symbols().len(),
            tokens = self.report.tokens().len(),
            "analysis finished"
        );
        &self.report
    }

    /// The latest report, empty if nothing was analyzed since creation or the last clear
    pub fn report(&self) -> &AnalysisReport {
        &self.report
    }

    /// Discards the symbol table, token stream, errors and tree of the latest run
    pub fn clear(&mut self) {
        debug!("clearing analysis state");
        self.report = AnalysisReport::default();
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            reserved_words: ReservedWords::default(),
            report: AnalysisReport::default(),
        }
    }
}

/// Builder for creating an [Analyzer] instance.
#[derive(Debug, Default)]
pub struct AnalyzerBuilder {
    reserved_words: ReservedWords,
}

impl AnalyzerBuilder {
    /// Creates an AnalyzerBuilder with default settings
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses one of the built in reserved word sets
    pub fn reserved_words(mut self, set: ReservedWordSet) -> Self {
        self.reserved_words = set.into();
        self
    }

    /// Uses a custom reserved word set
    pub fn custom_reserved_words<I: IntoIterator<Item: AsRef<str>>>(mut self, words: I) -> Self {
        self.reserved_words = ReservedWords::new(words);
        self
    }

    /// Builds an [Analyzer] instance from this builder
    pub fn build(self) -> Result<Analyzer, BuildAnalyzerError> {
        if self.reserved_words.is_empty() {
            return Err(BuildAnalyzerError::NoReservedWords);
        }
        if let Some(invalid) = self
            .reserved_words
            .iter()
            .find(|word| !IDENTIFIER.is_match(word))
        {
            return Err(BuildAnalyzerError::InvalidReservedWord(invalid.to_string()));
        }
        debug!(reserved_words = %self.reserved_words, "built analyzer");
        Ok(Analyzer {
            reserved_words: self.reserved_words,
            report: AnalysisReport::default(),
        })
    }
}
