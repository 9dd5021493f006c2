//! Errors produced while analyzing source text

use thiserror::Error;

/// Why a lexeme was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorKind {
    /// Identifier shaped, and a prefix of a reserved word or prefixed by one
    MisspelledReservedWord,
    /// Matched none of the classification rules
    Unrecognized,
}

/// A line scoped, non fatal lexical error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct LexicalError {
    line: usize,
    lexeme: String,
    kind: LexicalErrorKind,
}

impl LexicalError {
    pub fn new(line: usize, lexeme: impl Into<String>, kind: LexicalErrorKind) -> Self {
        Self {
            line,
            lexeme: lexeme.into(),
            kind,
        }
    }

    /// The 1-based line the lexeme was found on
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn kind(&self) -> LexicalErrorKind {
        self.kind
    }
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Línea {}] Error léxico: ", self.line)?;
        match self.kind {
            LexicalErrorKind::MisspelledReservedWord => write!(
                f,
                "Token inválido '{}' (posible palabra reservada mal escrita)",
                self.lexeme
            ),
            LexicalErrorKind::Unrecognized => write!(f, "Token no reconocido '{}'", self.lexeme),
        }
    }
}

/// An error occurred while building an [Analyzer](crate::Analyzer)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildAnalyzerError {
    #[error("analysis can't occur without any reserved words")]
    NoReservedWords,
    #[error("{0:?} can not be a reserved word, reserved words must be a letter followed by letters or digits")]
    InvalidReservedWord(String),
}
