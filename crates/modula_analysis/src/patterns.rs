//! Line patterns shared by the analysis stages

use regex::Regex;
use std::sync::LazyLock;

macro_rules! pattern {
    ($(#[$meta:meta])* $name:ident = $re:literal) => {
        $(#[$meta])*
        pub(crate) static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect(concat!("invalid pattern: ", $re)));
    };
}

pattern!(
    /// A whole lexeme shaped like an identifier
    IDENTIFIER = r"^[a-zA-Z][a-zA-Z0-9]*$"
);
pattern!(
    /// `<id> : <TYPE>` anywhere in a line
    DECLARATION = r"([a-zA-Z][a-zA-Z0-9]*)\s*:\s*(INTEGER|REAL|BOOLEAN|CHAR)"
);
pattern!(
    /// A declaration line as seen by the tree builder, anchored and terminated by `;`
    DECLARATION_LINE = r"^([a-zA-Z][a-zA-Z0-9]*)\s*:\s*(INTEGER|REAL|CHAR|BOOLEAN).*;"
);
pattern!(
    /// `<id> := <expr>;` spanning the whole trimmed line
    ASSIGNMENT = r"^([a-zA-Z][a-zA-Z0-9]*)\s*:=\s*(.+);$"
);
pattern!(NON_ALPHANUMERIC = r"[^a-zA-Z0-9]+");
pattern!(
    /// Whitespace and the operator/punctuation set, longest alternatives first
    TOKEN_SEPARATOR = r"\s+|:=|\.{2}|>=|<=|<>|=|#|<|>|\+|-|\*|/|:|;|,|\.|\(|\)|\[|\]|\{|\}"
);
pattern!(INTEGER = r"^\d+$");
pattern!(REAL = r"^\d+\.\d+$");
pattern!(CHAR = r"^'.'$");
pattern!(STRING = r#"^".*"$"#);
pattern!(
    /// Splits at the first arithmetic operator that has text on both sides
    ARITHMETIC = r"(.+?)([+\-*/])(.+)"
);
pattern!(
    /// Splits at the first relational operator. Single character operators are tried first,
    /// so `a <= b` splits into `a`, `<` and `= b`
    RELATION = r"(.+?)\s*(=|#|<|>|<=|>=|<>)\s*(.+)"
);
pattern!(
    FOR_HEADER = r"(?i)FOR\s+([a-zA-Z][a-zA-Z0-9]*)\s*:=\s*(\d+)\s+TO\s+(\d+)\s+DO"
);

/// Creates a pattern matching `word` as a whole word
pub(crate) fn whole_word(word: &str) -> Regex {
    Regex::new(&format!(r"\b{}\b", regex::escape(word))).expect("escaped words are always valid")
}

/// Splits a line at [TOKEN_SEPARATOR], keeping the separators as pieces of their own
pub(crate) fn split_keeping_separators(line: &str) -> Vec<&str> {
    let mut pieces = vec![];
    let mut last = 0;
    for separator in TOKEN_SEPARATOR.find_iter(line) {
        pieces.push(&line[last..separator.start()]);
        pieces.push(separator.as_str());
        last = separator.end();
    }
    pieces.push(&line[last..]);
    pieces
}
