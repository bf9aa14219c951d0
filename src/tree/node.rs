//! Tree nodes and their identifiers

use serde::{Deserialize, Serialize};

/// Index of a node inside its owning [`RootedTree`](super::RootedTree).
///
/// Ids are assigned in pre-order when a tree is built, so the root is always
/// [`ROOT`]. They exist for display and traversal only; two trees are the same
/// tree when their canonical forms agree, regardless of ids.
pub type NodeId = usize;

/// Id of the root node of every tree
pub const ROOT: NodeId = 0;

/// A node of a rooted tree
///
/// The node's children are owned through the tree's arena; `parent` is a
/// lookup-only back-reference used for walking towards the root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl TreeNode {
    pub(crate) fn new(id: NodeId, parent: Option<NodeId>) -> Self {
        TreeNode {
            id,
            parent,
            children: Vec::new(),
        }
    }

    /// Id of this node
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Parent of this node, `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children of this node in attachment order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Number of children
    pub fn degree(&self) -> usize {
        self.children.len()
    }

    /// True for the root node
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// True for nodes without children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_node_is_root_and_leaf() {
        let node = TreeNode::new(ROOT, None);
        assert!(node.is_root());
        assert!(node.is_leaf());
        assert_eq!(node.degree(), 0);
    }

    #[test]
    fn test_child_node() {
        let mut node = TreeNode::new(3, Some(1));
        node.children.push(4);
        assert!(!node.is_root());
        assert!(!node.is_leaf());
        assert_eq!(node.parent(), Some(1));
        assert_eq!(node.children(), &[4usize]);
    }
}
