//! Composed token codes, `nnncc`, and the counters that produce them

use crate::category::Category;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// A per-category sequence number joined with its category code.
///
/// Displays as the sequence zero padded to three digits followed by the category zero
/// padded to two, so the third identifier seen is `00310`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenCode {
    sequence: u32,
    category: Category,
}

impl TokenCode {
    /// Creates a new token code
    pub const fn new(sequence: u32, category: Category) -> Self {
        Self { sequence, category }
    }

    /// The 1-based position of this occurrence within its category
    #[inline]
    pub const fn sequence(&self) -> u32 {
        self.sequence
    }

    #[inline]
    pub const fn category(&self) -> Category {
        self.category
    }
}

impl Display for TokenCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}{:02}", self.sequence, self.category.code())
    }
}

impl FromStr for TokenCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 5 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseCodeError::Malformed(s.to_string()));
        }
        let (sequence, category) = s.split_at(s.len() - 2);
        let sequence = sequence
            .parse::<u32>()
            .map_err(|_| ParseCodeError::Malformed(s.to_string()))?;
        let category = category
            .parse::<u8>()
            .map_err(|_| ParseCodeError::Malformed(s.to_string()))?;
        let category = Category::from_code(category).ok_or(ParseCodeError::UnknownCategory(category))?;
        Ok(Self::new(sequence, category))
    }
}

/// An error occurred while parsing a [TokenCode]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCodeError {
    #[error("{0:?} is not a token code, expected at least five digits")]
    Malformed(String),
    #[error("{0} is not a known category code")]
    UnknownCategory(u8),
}

/// Per-category occurrence counters.
///
/// Every call to [advance](CategoryCounters::advance) consumes a slot, whether or not the
/// resulting code is ever shown.
#[derive(Debug, Default, Clone)]
pub struct CategoryCounters {
    counts: HashMap<Category, u32>,
}

impl CategoryCounters {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter for the category and returns the composed code
    pub fn advance(&mut self, category: Category) -> TokenCode {
        let count = self.counts.entry(category).or_insert(0);
        *count += 1;
        TokenCode::new(*count, category)
    }

    /// The last sequence number handed out for a category, 0 if none has been
    pub fn current(&self, category: Category) -> u32 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Resets every counter back to zero
    pub fn reset(&mut self) {
        self.counts.clear();
    }
}
