//! Builders for the closed subtrees produced from a single line

use crate::patterns::{ARITHMETIC, DECLARATION_LINE, FOR_HEADER, RELATION};
use modula_ast::labels::*;
use modula_ast::TreeNode;

fn leaf(label: &str) -> TreeNode {
    TreeNode::new(label)
}

fn wrapped(label: &str, text: &str) -> TreeNode {
    TreeNode::with_children(label, [TreeNode::new(text)])
}

/// Removes every occurrence of each of the words, then trims
fn strip_all(line: &str, words: &[&str]) -> String {
    words
        .iter()
        .fold(line.to_string(), |text, word| text.replace(word, ""))
        .trim()
        .to_string()
}

/// `MODULE <name>;`
pub(crate) fn module(line: &str) -> TreeNode {
    let mut node = leaf(MODULE);
    let mut parts = line.split([' ', ';']).filter(|part| !part.is_empty());
    if let Some(name) = parts.nth(1) {
        node.push(leaf(IDENTIFIER));
        node.push(leaf(name));
        node.push(leaf(SEMICOLON));
    }
    node
}

/// `<id> : <TYPE> ... ;`
pub(crate) fn declaration(line: &str) -> TreeNode {
    let mut node = leaf(DECLARATION);
    if let Some(captures) = DECLARATION_LINE.captures(line) {
        node.push(leaf(IDENTIFIER));
        node.push(leaf(&captures[1]));
        node.push(leaf(COLON));
        node.push(leaf(TYPE));
        node.push(leaf(&captures[2]));
        node.push(leaf(SEMICOLON));
    }
    node
}

/// `<id> := <expr>;`
pub(crate) fn statement(line: &str) -> TreeNode {
    let mut parts = line.split(ASSIGN);
    let target = parts.next().unwrap_or_default().trim();
    let expression = parts
        .next()
        .unwrap_or_default()
        .trim_matches(|c| c == ';' || c == ' ');
    TreeNode::with_children(
        STATEMENT,
        [
            leaf(IDENTIFIER),
            leaf(target),
            leaf(ASSIGN),
            factor(expression),
            leaf(SEMICOLON),
        ],
    )
}

/// Splits an expression at `NOT` or at its first arithmetic operator.
///
/// An expression with neither yields a factor with no children.
pub(crate) fn factor(expression: &str) -> TreeNode {
    let mut node = leaf(FACTOR);
    if let Some(operand) = expression.strip_prefix("NOT ") {
        node.push(wrapped(OPERATOR, NOT));
        node.push(wrapped(OPERAND, operand.trim()));
    } else if let Some(captures) = ARITHMETIC.captures(expression) {
        node.push(wrapped(OPERAND, captures[1].trim()));
        node.push(wrapped(OPERATOR, captures[2].trim()));
        node.push(wrapped(OPERAND, captures[3].trim()));
    }
    node
}

/// Strips the keywords from the line and splits what remains at a relational operator
pub(crate) fn condition(line: &str, keywords: &[&str]) -> TreeNode {
    let text = strip_all(line, keywords);
    let mut node = leaf(CONDITION);
    match RELATION.captures(&text) {
        Some(captures) => {
            node.push(wrapped(OPERAND, captures[1].trim()));
            node.push(wrapped(OPERATOR, captures[2].trim()));
            node.push(wrapped(OPERAND, captures[3].trim()));
        }
        None => node.push(wrapped(OPERAND, &text)),
    }
    node
}

/// `END [<id>][.]`
pub(crate) fn end(line: &str) -> TreeNode {
    let mut node = leaf(END);
    let name = strip_all(line, &["END", ".", ";"]);
    if !name.is_empty() {
        node.push(leaf(IDENTIFIER));
        node.push(leaf(&name));
    }
    if line.contains('.') {
        node.push(leaf(DOT));
    }
    node
}

/// `UNTIL <condition>;`
pub(crate) fn until(line: &str) -> TreeNode {
    TreeNode::with_children(UNTIL, [condition(line, &["UNTIL", ";"])])
}

/// `FOR <id> := <int> TO <int> DO`, or the raw line when it has any other shape
pub(crate) fn for_control(line: &str) -> TreeNode {
    match FOR_HEADER.captures(line) {
        Some(captures) => TreeNode::with_children(
            CONTROL,
            [
                leaf(VARIABLE),
                leaf(&captures[1]),
                leaf(ASSIGN),
                leaf(START),
                leaf(&captures[2]),
                leaf(TO),
                leaf(FINISH),
                leaf(&captures[3]),
            ],
        ),
        None => wrapped(CONTROL, line),
    }
}
