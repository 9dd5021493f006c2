//! Symbol table construction from declarations and assignments

use crate::context::AnalysisContext;
use crate::patterns::{whole_word, ASSIGNMENT, DECLARATION, NON_ALPHANUMERIC};
use indexmap::IndexMap;
use itertools::Itertools as _;
use modula_tokens::prelude::*;
use regex::Regex;
use std::collections::BTreeSet;
use std::str::FromStr;
use strum::{Display, EnumString};
use tracing::{debug, trace, trace_span};

/// Name never entered into the symbol table, regardless of case
const EXCLUDED_NAME: &str = "SUMA";

/// The types a declaration may name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum DeclaredType {
    Integer,
    Real,
    Boolean,
    Char,
}

/// A declared identifier
#[derive(Debug, Clone)]
pub struct Symbol {
    code: TokenCode,
    name: String,
    ty: DeclaredType,
    value: String,
    declaration_line: Option<usize>,
    references: BTreeSet<usize>,
    word: Regex,
}

impl Symbol {
    fn new(code: TokenCode, name: &str, ty: DeclaredType, line: usize) -> Self {
        Self {
            code,
            name: name.to_string(),
            ty,
            value: String::new(),
            declaration_line: Some(line),
            references: BTreeSet::from([line]),
            word: whole_word(name),
        }
    }

    pub fn code(&self) -> TokenCode {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> DeclaredType {
        self.ty
    }

    /// The right hand side text of the latest assignment, empty if never assigned
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn declaration_line(&self) -> Option<usize> {
        self.declaration_line
    }

    /// Lines referencing this symbol, ascending
    pub fn references(&self) -> impl Iterator<Item = usize> + '_ {
        self.references.iter().copied()
    }

    fn reference(&mut self, line: usize) {
        if self.references.insert(line) {
            trace!(symbol = %self.name, line, "new reference");
        }
    }

    /// Renders this symbol as a display row
    pub fn to_row(&self) -> SymbolRow {
        SymbolRow {
            token: self.code.to_string(),
            name: self.name.clone(),
            ty: self.ty.to_string(),
            value: self.value.clone(),
            declaration_line: self
                .declaration_line
                .map(|line| line.to_string())
                .unwrap_or_default(),
            references: self.references.iter().join(","),
        }
    }
}

/// A symbol rendered as plain text columns
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolRow {
    pub token: String,
    pub name: String,
    pub ty: String,
    pub value: String,
    /// Empty when there is no declaration line
    pub declaration_line: String,
    /// Comma joined, ascending
    pub references: String,
}

/// Declared symbols, in declaration order
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    symbols: IndexMap<String, Symbol>,
}

impl SymbolTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn rows(&self) -> Vec<SymbolRow> {
        self.iter().map(Symbol::to_row).collect()
    }

    /// Registers a declaration. The first declaration of a name wins, reserved words and the
    /// excluded name are skipped.
    ///
    /// Returns `true` if a new symbol was inserted.
    pub fn declare(
        &mut self,
        name: &str,
        ty: DeclaredType,
        line: usize,
        reserved: &ReservedWords,
        counters: &mut CategoryCounters,
    ) -> bool {
        if reserved.contains(name) || name.eq_ignore_ascii_case(EXCLUDED_NAME) {
            trace!(symbol = %name, "not a declarable name");
            return false;
        }
        if self.symbols.contains_key(name) {
            return false;
        }
        let code = counters.advance(Category::Identifier);
        debug!(symbol = %name, %ty, line, %code, "declared symbol");
        self.symbols
            .insert(name.to_string(), Symbol::new(code, name, ty, line));
        true
    }

    /// Records an assignment to a declared symbol. Assignments to undeclared names are ignored.
    pub fn assign(&mut self, name: &str, value: &str, line: usize) {
        if let Some(symbol) = self.symbols.get_mut(name) {
            symbol.value = value.to_string();
            symbol.reference(line);
        }
    }

    /// Adds a reference to a symbol, if it exists
    pub fn reference(&mut self, name: &str, line: usize) {
        if let Some(symbol) = self.symbols.get_mut(name) {
            symbol.reference(line);
        }
    }

    /// References every symbol whose name appears in the line as a whole word
    pub fn reference_mentions(&mut self, line: &str, line_number: usize) {
        for symbol in self.symbols.values_mut() {
            if symbol.word.is_match(line) {
                symbol.reference(line_number);
            }
        }
    }
}

/// Scans every line for declarations, assignments and mentions of declared names.
pub fn build_symbol_table(ctx: &mut AnalysisContext<'_>) {
    let span = trace_span!("symbol_table", lines = ctx.lines().len());
    let _enter = span.enter();

    let AnalysisContext {
        reserved,
        lines,
        symbols,
        counters,
        ..
    } = ctx;

    for (index, raw) in lines.iter().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();

        for captures in DECLARATION.captures_iter(line) {
            let Ok(ty) = DeclaredType::from_str(&captures[2]) else {
                continue;
            };
            symbols.declare(&captures[1], ty, line_number, reserved, counters);
        }

        if let Some(captures) = ASSIGNMENT.captures(line) {
            let target = &captures[1];
            symbols.assign(target, captures[2].trim(), line_number);
            for used in NON_ALPHANUMERIC.split(&captures[2]) {
                if used != target {
                    symbols.reference(used, line_number);
                }
            }
        }

        symbols.reference_mentions(line, line_number);
    }
    debug!(symbols = symbols.len(), "symbol table built");
}
