//! State threaded through one analysis run

use crate::error::LexicalError;
use crate::report::AnalysisReport;
use crate::symbols::SymbolTable;
use modula_ast::TreeNode;
use modula_tokens::prelude::*;

/// Everything one analysis run reads and mutates.
///
/// A context is created fresh for every run, so nothing carries over between runs.
#[derive(Debug)]
pub struct AnalysisContext<'a> {
    pub(crate) reserved: &'a ReservedWords,
    pub(crate) lines: Vec<&'a str>,
    pub(crate) symbols: SymbolTable,
    pub(crate) counters: CategoryCounters,
    pub(crate) tokens: TokenStream,
    pub(crate) errors: Vec<LexicalError>,
}

impl<'a> AnalysisContext<'a> {
    /// Creates a context over the line feed separated lines of `source`
    pub fn new(reserved: &'a ReservedWords, source: &'a str) -> Self {
        Self {
            reserved,
            lines: source.split('\n').collect(),
            symbols: SymbolTable::new(),
            counters: CategoryCounters::new(),
            tokens: TokenStream::new(),
            errors: vec![],
        }
    }

    /// The physical lines, untrimmed. Line `n` is at index `n - 1`.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn reserved_words(&self) -> &ReservedWords {
        self.reserved
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    /// Resets the per-category counters, so the tokenizer numbers identifiers independently of
    /// the symbol table
    pub fn reset_counters(&mut self) {
        self.counters.reset();
    }

    /// Consumes this context, producing the plain data handed to display collaborators
    pub fn into_report(self, tree: Option<TreeNode>) -> AnalysisReport {
        AnalysisReport::new(
            self.symbols.rows(),
            self.tokens,
            self.errors,
            self.lines.len(),
            tree,
        )
    }
}
