//! Nodes that stay open to new children while the tree is being built

use modula_ast::TreeNode;

/// Refers to an open node within a [NodeArena]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

#[derive(Debug)]
enum Child {
    Open(NodeId),
    Closed(TreeNode),
}

#[derive(Debug)]
struct OpenNode {
    label: String,
    children: Vec<Child>,
}

/// Holds open nodes by id so the block stack can refer to them while they are still being
/// filled. Finished subtrees are attached as owned [TreeNode]s.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<OpenNode>,
}

impl NodeArena {
    pub(crate) fn open(&mut self, label: impl Into<String>) -> NodeId {
        self.open_with(label, std::iter::empty::<TreeNode>())
    }

    pub(crate) fn open_with(
        &mut self,
        label: impl Into<String>,
        children: impl IntoIterator<Item = TreeNode>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(OpenNode {
            label: label.into(),
            children: children.into_iter().map(Child::Closed).collect(),
        });
        id
    }

    pub(crate) fn attach(&mut self, parent: NodeId, child: TreeNode) {
        self.nodes[parent.0].children.push(Child::Closed(child));
    }

    pub(crate) fn attach_open(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(Child::Open(child));
    }

    /// Produces the owned tree rooted at `id`.
    ///
    /// An open node attached in more than one place is copied into each of them.
    pub(crate) fn finish(&self, id: NodeId) -> TreeNode {
        let node = &self.nodes[id.0];
        TreeNode::with_children(
            node.label.clone(),
            node.children.iter().map(|child| match child {
                Child::Open(open) => self.finish(*open),
                Child::Closed(closed) => closed.clone(),
            }),
        )
    }
}
