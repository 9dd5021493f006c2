//! A classified lexical unit, along with the stream they are emitted into

use crate::category::Category;
use crate::code::TokenCode;
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

/// A classified lexeme
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenRecord {
    lexeme: String,
    code: TokenCode,
}

impl TokenRecord {
    /// Creates a new token record
    pub fn new(lexeme: impl Into<String>, code: TokenCode) -> Self {
        Self {
            lexeme: lexeme.into(),
            code,
        }
    }

    /// The text as it appeared in the source, case preserved
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn code(&self) -> TokenCode {
        self.code
    }

    pub fn category(&self) -> Category {
        self.code.category()
    }
}

impl Display for TokenRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.lexeme)
    }
}

/// An ordered stream of token records where a `(code, lexeme)` pair appears at most once.
#[derive(Debug, Default, Clone)]
pub struct TokenStream {
    records: Vec<TokenRecord>,
    seen: HashSet<(TokenCode, String)>,
}

impl TokenStream {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits a record unless an identical one was already emitted.
    ///
    /// Returns `true` if the record was appended.
    pub fn push(&mut self, record: TokenRecord) -> bool {
        if self.seen.insert((record.code, record.lexeme.clone())) {
            self.records.push(record);
            true
        } else {
            false
        }
    }

    /// The emitted records in discovery order
    pub fn records(&self) -> &[TokenRecord] {
        &self.records
    }

    /// The emitted records rendered as `"<code> <lexeme>"`
    pub fn lines(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Extend<TokenRecord> for TokenStream {
    fn extend<T: IntoIterator<Item = TokenRecord>>(&mut self, iter: T) {
        for record in iter {
            self.push(record);
        }
    }
}

impl FromIterator<TokenRecord> for TokenStream {
    fn from_iter<T: IntoIterator<Item = TokenRecord>>(iter: T) -> Self {
        let mut stream = Self::new();
        stream.extend(iter);
        stream
    }
}

impl IntoIterator for TokenStream {
    type Item = TokenRecord;
    type IntoIter = std::vec::IntoIter<TokenRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a TokenRecord;
    type IntoIter = std::slice::Iter<'a, TokenRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
