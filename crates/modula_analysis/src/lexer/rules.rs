//! The ordered classification rules. The first rule whose predicate holds decides the outcome.

use crate::error::LexicalErrorKind;
use crate::patterns::{CHAR, IDENTIFIER, INTEGER, REAL, STRING};
use modula_tokens::prelude::*;

/// What classifying a lexeme results in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Token(Category),
    Error(LexicalErrorKind),
}

/// A predicate paired with the outcome it produces
pub struct Rule {
    pub name: &'static str,
    predicate: fn(&str, &ReservedWords) -> bool,
    pub outcome: Outcome,
}

impl Rule {
    const fn new(
        name: &'static str,
        predicate: fn(&str, &ReservedWords) -> bool,
        outcome: Outcome,
    ) -> Self {
        Self {
            name,
            predicate,
            outcome,
        }
    }

    pub fn matches(&self, lexeme: &str, reserved: &ReservedWords) -> bool {
        (self.predicate)(lexeme, reserved)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

fn one_of(lexeme: &str, options: &[&str]) -> bool {
    options.contains(&lexeme)
}

/// Reserved words are checked before identifiers, and operators before punctuation.
pub static RULES: &[Rule] = &[
    Rule::new(
        "reserved word",
        |lexeme, reserved| reserved.contains(lexeme),
        Outcome::Token(Category::ReservedWord),
    ),
    Rule::new(
        "logical operator",
        |lexeme, _| ["AND", "OR", "NOT"].iter().any(|op| op.eq_ignore_ascii_case(lexeme)),
        Outcome::Token(Category::Logical),
    ),
    Rule::new(
        "misspelled reserved word",
        |lexeme, reserved| IDENTIFIER.is_match(lexeme) && reserved.is_near_miss(lexeme),
        Outcome::Error(LexicalErrorKind::MisspelledReservedWord),
    ),
    Rule::new(
        "identifier",
        |lexeme, _| IDENTIFIER.is_match(lexeme),
        Outcome::Token(Category::Identifier),
    ),
    Rule::new(
        "integer",
        |lexeme, _| INTEGER.is_match(lexeme),
        Outcome::Token(Category::Number),
    ),
    Rule::new(
        "real",
        |lexeme, _| REAL.is_match(lexeme),
        Outcome::Token(Category::Number),
    ),
    Rule::new(
        "character",
        |lexeme, _| CHAR.is_match(lexeme),
        Outcome::Token(Category::Char),
    ),
    Rule::new(
        "string",
        |lexeme, _| STRING.is_match(lexeme),
        Outcome::Token(Category::String),
    ),
    Rule::new(
        "arithmetic operator",
        |lexeme, _| one_of(lexeme, &["+", "-", "*", "/"]),
        Outcome::Token(Category::Arithmetic),
    ),
    Rule::new(
        "relational operator",
        |lexeme, _| one_of(lexeme, &["=", "#", "<", ">", "<=", ">=", "<>"]),
        Outcome::Token(Category::Relational),
    ),
    Rule::new("range", |lexeme, _| lexeme == "..", Outcome::Token(Category::Range)),
    Rule::new("assignment", |lexeme, _| lexeme == ":=", Outcome::Token(Category::Assign)),
    Rule::new("type separator", |lexeme, _| lexeme == ":", Outcome::Token(Category::Colon)),
    Rule::new(
        "separator",
        |lexeme, _| one_of(lexeme, &[";", ","]),
        Outcome::Token(Category::Separator),
    ),
    Rule::new("terminator", |lexeme, _| lexeme == ".", Outcome::Token(Category::Terminator)),
    Rule::new(
        "grouping",
        |lexeme, _| one_of(lexeme, &["{", "}", "(", ")", "[", "]"]),
        Outcome::Token(Category::Grouping),
    ),
];

/// Classifies a single lexeme
pub fn classify(lexeme: &str, reserved: &ReservedWords) -> Outcome {
    RULES
        .iter()
        .find(|rule| rule.matches(lexeme, reserved))
        .map(|rule| rule.outcome)
        .unwrap_or(Outcome::Error(LexicalErrorKind::Unrecognized))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> ReservedWords {
        ReservedWordSet::Full.into()
    }

    #[test]
    fn test_reserved_ignores_case() {
        assert_eq!(classify("begin", &full()), Outcome::Token(Category::ReservedWord));
        assert_eq!(classify("BEGIN", &full()), Outcome::Token(Category::ReservedWord));
    }

    #[test]
    fn test_logical_depends_on_reserved_set() {
        assert_eq!(classify("AND", &full()), Outcome::Token(Category::ReservedWord));
        let reduced = ReservedWordSet::Reduced.into();
        assert_eq!(classify("and", &reduced), Outcome::Token(Category::Logical));
        assert_eq!(classify("NOT", &reduced), Outcome::Token(Category::Logical));
    }

    #[test]
    fn test_misspelled_before_identifier() {
        assert_eq!(
            classify("BEGINN", &full()),
            Outcome::Error(LexicalErrorKind::MisspelledReservedWord)
        );
        assert_eq!(classify("total1", &full()), Outcome::Token(Category::Identifier));
    }

    #[test]
    fn test_literals() {
        assert_eq!(classify("42", &full()), Outcome::Token(Category::Number));
        assert_eq!(classify("3.14", &full()), Outcome::Token(Category::Number));
        assert_eq!(classify("'x'", &full()), Outcome::Token(Category::Char));
        assert_eq!(classify("\"hi\"", &full()), Outcome::Token(Category::String));
        assert_eq!(classify("'xy'", &full()), Outcome::Error(LexicalErrorKind::Unrecognized));
    }

    #[test]
    fn test_operators_and_punctuation() {
        let cases = [
            ("-", Category::Arithmetic),
            ("<>", Category::Relational),
            ("#", Category::Relational),
            ("..", Category::Range),
            (":=", Category::Assign),
            (":", Category::Colon),
            (",", Category::Separator),
            (".", Category::Terminator),
            ("]", Category::Grouping),
        ];
        for (lexeme, category) in cases {
            assert_eq!(classify(lexeme, &full()), Outcome::Token(category), "{lexeme}");
        }
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(classify("$", &full()), Outcome::Error(LexicalErrorKind::Unrecognized));
        assert_eq!(classify("1a", &full()), Outcome::Error(LexicalErrorKind::Unrecognized));
    }
}
