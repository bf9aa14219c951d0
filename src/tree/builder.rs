//! Incremental construction of rooted trees

use super::node::{NodeId, TreeNode, ROOT};
use super::RootedTree;
use crate::{Result, TreeFlipError};

/// Builder for constructing trees incrementally
///
/// Attaching a node that already has a parent, attaching the root, or
/// referring to a node that does not exist is recorded and reported by
/// [`build`](TreeBuilder::build); the builder methods themselves never fail so
/// they can be chained.
#[derive(Debug)]
pub struct TreeBuilder {
    parents: Vec<Option<NodeId>>,
    children: Vec<Vec<NodeId>>,
    error: Option<TreeFlipError>,
}

impl TreeBuilder {
    /// Create a new builder starting with a root
    pub fn new() -> Self {
        TreeBuilder {
            parents: vec![None],
            children: vec![Vec::new()],
            error: None,
        }
    }

    /// Number of nodes created so far, attached or not
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always false: a builder starts with its root
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Attach `child` under `parent`, growing the node table as needed
    ///
    /// Ids may run at most one past the next free id; anything further is
    /// recorded as [`TreeFlipError::NodeOutOfRange`].
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> &mut Self {
        let highest = parent.max(child);
        if highest > self.children.len() + 1 {
            self.fail(TreeFlipError::NodeOutOfRange {
                node: highest,
                size: self.children.len(),
            });
            return self;
        }

        while self.children.len() <= highest {
            self.parents.push(None);
            self.children.push(Vec::new());
        }

        if child == ROOT {
            self.fail(TreeFlipError::InvalidTree("the root cannot be attached as a child".to_string()));
        } else if child == parent {
            self.fail(TreeFlipError::InvalidTree("Self-loops not allowed".to_string()));
        } else if let Some(existing) = self.parents[child] {
            self.fail(TreeFlipError::InvalidTree(format!(
                "node {} already has parent {}",
                child, existing
            )));
        } else {
            self.parents[child] = Some(parent);
            self.children[parent].push(child);
        }

        self
    }

    /// Create a new leaf under `parent` and return its id
    pub fn add_leaf(&mut self, parent: NodeId) -> NodeId {
        let id = self.children.len();
        if parent >= id {
            self.fail(TreeFlipError::NodeOutOfRange { node: parent, size: id });
            self.parents.push(None);
            self.children.push(Vec::new());
            return id;
        }
        self.add_child(parent, id);
        id
    }

    /// Attach a fresh copy of `tree` under `parent`, returning the id of the
    /// copied root
    pub fn graft(&mut self, parent: NodeId, tree: &RootedTree) -> NodeId {
        self.graft_subtree(parent, tree, ROOT)
    }

    /// Attach a fresh copy of the subtree of `tree` rooted at `node`
    pub fn graft_subtree(&mut self, parent: NodeId, tree: &RootedTree, node: NodeId) -> NodeId {
        if node >= tree.size() {
            self.fail(TreeFlipError::NodeOutOfRange { node, size: tree.size() });
            return self.add_leaf(parent);
        }

        let top = self.add_leaf(parent);
        let mut stack = vec![(node, top)];
        while let Some((source, target)) = stack.pop() {
            for &child in tree.children(source) {
                let copy = self.add_leaf(target);
                stack.push((child, copy));
            }
        }
        top
    }

    /// Validate the structure and produce a tree with pre-order ids
    pub fn build(self) -> Result<RootedTree> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let n_nodes = self.children.len();
        let mut order = Vec::with_capacity(n_nodes);
        let mut stack = vec![ROOT];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.children[node].iter().rev());
        }

        if order.len() != n_nodes {
            return Err(TreeFlipError::InvalidTree(
                "Tree is not connected".to_string()
            ));
        }

        let mut renumbered = vec![ROOT; n_nodes];
        for (new_id, &old_id) in order.iter().enumerate() {
            renumbered[old_id] = new_id;
        }

        let nodes = order
            .iter()
            .enumerate()
            .map(|(new_id, &old_id)| TreeNode {
                id: new_id,
                parent: self.parents[old_id].map(|p| renumbered[p]),
                children: self.children[old_id].iter().map(|&c| renumbered[c]).collect(),
            })
            .collect();

        Ok(RootedTree { nodes })
    }

    fn fail(&mut self, error: TreeFlipError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
