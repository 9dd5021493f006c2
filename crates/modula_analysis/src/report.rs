//! The plain data produced by an analysis run

use crate::error::LexicalError;
use crate::symbols::SymbolRow;
use modula_ast::TreeNode;
use modula_tokens::token::{TokenRecord, TokenStream};

const CLEAN: &str = " Análisis léxico completado sin errores.";
const TREE_SKIPPED: &str = " Árbol sintáctico no generado debido a errores léxicos.";

/// The outputs of one analysis run, ready for rendering
#[derive(Debug, Default, Clone)]
pub struct AnalysisReport {
    symbols: Vec<SymbolRow>,
    tokens: TokenStream,
    errors: Vec<LexicalError>,
    line_count: usize,
    tree: Option<TreeNode>,
}

impl AnalysisReport {
    pub(crate) fn new(
        symbols: Vec<SymbolRow>,
        tokens: TokenStream,
        errors: Vec<LexicalError>,
        line_count: usize,
        tree: Option<TreeNode>,
    ) -> Self {
        Self {
            symbols,
            tokens,
            errors,
            line_count,
            tree,
        }
    }

    /// Symbol rows in declaration order
    pub fn symbols(&self) -> &[SymbolRow] {
        &self.symbols
    }

    pub fn tokens(&self) -> &[TokenRecord] {
        self.tokens.records()
    }

    /// Emitted tokens as `"<code> <lexeme>"`, in discovery order
    pub fn token_lines(&self) -> Vec<String> {
        self.tokens.lines()
    }

    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    /// Number of physical lines analyzed
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// The syntax tree, only present when no lexical errors were found
    pub fn tree(&self) -> Option<&TreeNode> {
        self.tree.as_ref()
    }

    /// Whether the run found no lexical errors
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether this report holds nothing at all, as after a clear
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
            && self.tokens.is_empty()
            && self.errors.is_empty()
            && self.tree.is_none()
    }

    /// The status lines: either every lexical error followed by a notice that the tree was
    /// not built, or a success notice followed by the analyzed line count.
    pub fn status_lines(&self) -> Vec<String> {
        if self.is_empty() && self.line_count == 0 {
            return vec![];
        }
        if self.errors.is_empty() {
            vec![
                CLEAN.to_string(),
                format!("Líneas analizadas: {}", self.line_count),
            ]
        } else {
            self.errors
                .iter()
                .map(ToString::to_string)
                .chain([TREE_SKIPPED.to_string()])
                .collect()
        }
    }
}
