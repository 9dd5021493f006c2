//! The fixed catalogue of lexical categories

use strum::{Display, EnumIter, IntoEnumIterator};

/// A lexical category, ordered by its two digit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
#[repr(u8)]
pub enum Category {
    #[strum(to_string = "reserved word")]
    ReservedWord = 5,
    #[strum(to_string = "identifier")]
    Identifier = 10,
    /// Integer or real
    #[strum(to_string = "numeric literal")]
    Number = 15,
    #[strum(to_string = "character literal")]
    Char = 20,
    #[strum(to_string = "string literal")]
    String = 25,
    #[strum(to_string = "arithmetic operator")]
    Arithmetic = 30,
    #[strum(to_string = "relational operator")]
    Relational = 35,
    /// `AND`, `OR` and `NOT`
    #[strum(to_string = "logical operator")]
    Logical = 40,
    /// `..`
    #[strum(to_string = "range operator")]
    Range = 45,
    /// `:=`
    #[strum(to_string = "assignment")]
    Assign = 50,
    /// `:`
    #[strum(to_string = "type separator")]
    Colon = 55,
    /// `;` or `,`
    #[strum(to_string = "statement separator")]
    Separator = 60,
    /// `.`
    #[strum(to_string = "terminator")]
    Terminator = 65,
    /// braces, parentheses and brackets
    #[strum(to_string = "grouping symbol")]
    Grouping = 70,
}

impl Category {
    /// Gets the two digit code of this category
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Finds the category with the given code
    pub fn from_code(code: u8) -> Option<Self> {
        Self::iter().find(|category| category.code() == code)
    }
}
