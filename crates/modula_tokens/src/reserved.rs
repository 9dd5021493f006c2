//! Reserved word sets

use itertools::Itertools as _;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use strum::{Display as StrumDisplay, EnumString};

const FULL: &[&str] = &[
    "AND", "ARRAY", "BEGIN", "BOOLEAN", "BY", "CASE", "CHAR", "CONST", "DEFINITION", "DIV", "DO",
    "ELSE", "ELSIF", "END", "EXIT", "EXPORT", "FALSE", "FOR", "FROM", "IF", "IMPORT", "IN",
    "INTEGER", "LOOP", "MOD", "MODULE", "NOT", "OF", "OR", "POINTER", "PROCEDURE", "QUALIFIED",
    "REAL", "RECORD", "REPEAT", "RETURN", "SET", "THEN", "TO", "TRUE", "TYPE", "UNTIL", "VAR",
    "WHILE", "WITH",
];

const REDUCED: &[&str] = &[
    "MODULE", "VAR", "BEGIN", "END", "IF", "THEN", "ELSE", "WHILE", "DO", "REPEAT", "UNTIL", "FOR",
];

/// The built in reserved word sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ReservedWordSet {
    /// Every Modula-2 keyword, including `AND`, `OR` and `NOT`
    #[default]
    Full,
    /// Only the structural keywords recognized by the tree builder
    Reduced,
}

impl ReservedWordSet {
    fn words(self) -> &'static [&'static str] {
        match self {
            ReservedWordSet::Full => FULL,
            ReservedWordSet::Reduced => REDUCED,
        }
    }
}

/// A set of reserved words, stored upper case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedWords {
    words: BTreeSet<String>,
}

impl ReservedWords {
    /// Creates a reserved word set from arbitrary words
    pub fn new<I: IntoIterator<Item: AsRef<str>>>(words: I) -> Self {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_uppercase())
                .collect(),
        }
    }

    /// Checks whether the word is reserved, ignoring case
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Checks whether `word` looks like a misspelling of a reserved word.
    ///
    /// A word is a near miss when it is a prefix of some reserved word or some reserved word is
    /// a prefix of it, while not itself being reserved. The prefix test is case sensitive, so
    /// `BEGINN` is a near miss of `BEGIN` but `beginn` is not.
    pub fn is_near_miss(&self, word: &str) -> bool {
        !self.contains(word)
            && self
                .words
                .iter()
                .any(|reserved| reserved.starts_with(word) || word.starts_with(reserved.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        ReservedWordSet::default().into()
    }
}

impl From<ReservedWordSet> for ReservedWords {
    fn from(value: ReservedWordSet) -> Self {
        Self::new(value.words())
    }
}

impl Display for ReservedWords {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.words.iter().join(", "))
    }
}
