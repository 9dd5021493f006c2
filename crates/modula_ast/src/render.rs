//! Renders a tree as indented text

use crate::node::TreeNode;
use itertools::Itertools as _;
use std::fmt::{Display, Formatter};

/// Displays a tree using box drawing guides.
///
/// ```
/// # use modula_ast::TreeNode;
/// # use modula_ast::render::Rendered;
/// let tree = TreeNode::with_children("Program", [TreeNode::new("MODULE"), TreeNode::new("Block")]);
/// assert_eq!(Rendered(&tree).to_string(), "Program\n├── MODULE\n└── Block\n");
/// ```
pub struct Rendered<'a>(pub &'a TreeNode);

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.0.label())?;
        render_children(f, self.0, "")
    }
}

fn render_children(f: &mut Formatter<'_>, node: &TreeNode, prefix: &str) -> std::fmt::Result {
    for (position, child) in node.children().iter().with_position() {
        let last = matches!(position, itertools::Position::Last | itertools::Position::Only);
        let (branch, guide) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
        writeln!(f, "{prefix}{branch}{}", child.label())?;
        render_children(f, child, &format!("{prefix}{guide}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested() {
        let tree = TreeNode::with_children(
            "Program",
            [
                TreeNode::with_children("MODULE", [TreeNode::new("Test")]),
                TreeNode::new("Block"),
            ],
        );
        let rendered = Rendered(&tree).to_string();
        assert_eq!(rendered, "Program\n├── MODULE\n│   └── Test\n└── Block\n");
    }
}
