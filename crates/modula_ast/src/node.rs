use std::fmt::{Debug, Formatter};

/// A node of the syntax tree.
///
/// Every node exclusively owns its children, in order.
#[derive(Clone, PartialEq, Eq)]
pub struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Creates a node with no children
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: vec![],
        }
    }

    /// Creates a node with the given children
    pub fn with_children(label: impl Into<String>, children: impl IntoIterator<Item = TreeNode>) -> Self {
        Self {
            label: label.into(),
            children: children.into_iter().collect(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn push(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// Gets the first direct child with the given label
    pub fn child(&self, label: &str) -> Option<&TreeNode> {
        self.children.iter().find(|child| child.label == label)
    }

    /// Gets every direct child with the given label
    pub fn children_labeled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a TreeNode> + 'a {
        self.children.iter().filter(move |child| child.label == label)
    }

    /// The labels of the direct children, in order
    pub fn child_labels(&self) -> Vec<&str> {
        self.children.iter().map(TreeNode::label).collect()
    }

    /// Depth first, pre-order search for a node with the given label
    pub fn find(&self, label: &str) -> Option<&TreeNode> {
        if self.label == label {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(label))
    }

    /// Number of nodes in this subtree, including this one
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Debug for TreeNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.children.is_empty() {
            write!(f, "{:?}", self.label)
        } else {
            f.debug_map().entry(&self.label, &self.children).finish()
        }
    }
}
