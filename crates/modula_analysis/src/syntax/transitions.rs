//! Which structural keyword a line starts with, and what that does to the open-block stack

use crate::patterns::DECLARATION_LINE;

/// The structural role of one trimmed, non-blank line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Module,
    Var,
    Declaration,
    Begin,
    Assignment,
    If,
    Then,
    Else,
    End,
    While,
    Do,
    Repeat,
    Until,
    For,
}

/// How a line kind changes the open-block stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackEffect {
    /// Fills one of the fixed sections, never touches the stack
    Section,
    /// Attaches to the innermost open block
    Attach,
    /// Attaches to the innermost open block, then becomes the innermost open block
    Open,
    /// Pops when more than one block is open, attaches to the new innermost block, then
    /// becomes the innermost open block
    Reopen,
    /// Pops when more than one block is open
    Close,
    /// Attaches to the innermost open block, then pops whatever is open
    AttachThenPop,
}

impl LineKind {
    /// The stack transition for this kind of line
    pub const fn stack_effect(self) -> StackEffect {
        match self {
            LineKind::Module | LineKind::Var | LineKind::Declaration | LineKind::Begin => {
                StackEffect::Section
            }
            LineKind::Assignment => StackEffect::Attach,
            LineKind::If
            | LineKind::Then
            | LineKind::While
            | LineKind::Do
            | LineKind::Repeat
            | LineKind::For => StackEffect::Open,
            LineKind::Else => StackEffect::Reopen,
            LineKind::End => StackEffect::Close,
            LineKind::Until => StackEffect::AttachThenPop,
        }
    }

    /// Finds the kind of a trimmed line. The tests run in a fixed order and the first one to
    /// succeed decides. Returns `None` for lines the tree builder ignores.
    pub fn classify(line: &str, in_declarations: bool, in_statements: bool) -> Option<Self> {
        let kind = if line.starts_with("MODULE") {
            LineKind::Module
        } else if line.starts_with("VAR") {
            LineKind::Var
        } else if in_declarations && DECLARATION_LINE.is_match(line) {
            LineKind::Declaration
        } else if line.starts_with("BEGIN") {
            LineKind::Begin
        } else if in_statements && line.contains(":=") && !line.starts_with("FOR") {
            LineKind::Assignment
        } else if line.starts_with("IF") {
            LineKind::If
        } else if line.starts_with("THEN") {
            LineKind::Then
        } else if line.starts_with("ELSE") {
            LineKind::Else
        } else if line.starts_with("END") {
            LineKind::End
        } else if line.starts_with("WHILE") {
            LineKind::While
        } else if line.starts_with("DO") {
            LineKind::Do
        } else if line.starts_with("REPEAT") {
            LineKind::Repeat
        } else if line.starts_with("UNTIL") {
            LineKind::Until
        } else if line.starts_with("FOR") {
            LineKind::For
        } else {
            return None;
        };
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declarations_need_the_flag() {
        assert_eq!(LineKind::classify("a : INTEGER;", true, false), Some(LineKind::Declaration));
        assert_eq!(LineKind::classify("a : INTEGER;", false, false), None);
        assert_eq!(LineKind::classify("a : INTEGER", true, false), None);
    }

    #[test]
    fn test_assignments_need_the_flag() {
        assert_eq!(LineKind::classify("a := 1;", true, true), Some(LineKind::Assignment));
        assert_eq!(LineKind::classify("a := 1;", false, false), None);
        assert_eq!(LineKind::classify("FOR i := 1 TO 3 DO", false, true), Some(LineKind::For));
    }

    #[test]
    fn test_assignment_checked_before_keywords() {
        assert_eq!(LineKind::classify("IF x THEN y := 1", false, true), Some(LineKind::Assignment));
        assert_eq!(LineKind::classify("IF x THEN y := 1", false, false), Some(LineKind::If));
    }

    #[test]
    fn test_prefixes_are_case_sensitive() {
        assert_eq!(LineKind::classify("end.", false, true), None);
        assert_eq!(LineKind::classify("ELSE", false, true), Some(LineKind::Else));
        assert_eq!(LineKind::classify("ELSIF a THEN", false, true), None);
    }

    #[test]
    fn test_pops_are_asymmetric() {
        assert_eq!(LineKind::Else.stack_effect(), StackEffect::Reopen);
        assert_eq!(LineKind::End.stack_effect(), StackEffect::Close);
        assert_eq!(LineKind::Until.stack_effect(), StackEffect::AttachThenPop);
        assert_eq!(LineKind::Repeat.stack_effect(), StackEffect::Open);
    }
}
