//! Rooted tree data structure and read-only queries

use super::node::{NodeId, TreeNode, ROOT};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An immutable rooted tree stored as a node arena
///
/// - Node 0 is always the root
/// - Node ids follow pre-order, so `nodes()` is a pre-order traversal
/// - Equality, ordering and hashing go through the canonical form
///
/// Trees are only produced by [`TreeBuilder::build`](super::TreeBuilder::build)
/// (or [`RootedTree::new`]) and are never mutated afterwards. Restructuring,
/// such as rerooting, always builds a new tree.
#[derive(Clone)]
pub struct RootedTree {
    pub(crate) nodes: Vec<TreeNode>,
}

impl RootedTree {
    /// Create a tree consisting of a single root node
    pub fn new() -> Self {
        RootedTree {
            nodes: vec![TreeNode::new(ROOT, None)],
        }
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// The root node
    pub fn root(&self) -> &TreeNode {
        &self.nodes[ROOT]
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// All nodes in pre-order
    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> + '_ {
        self.nodes.iter()
    }

    /// All node ids in pre-order
    pub fn node_ids(&self) -> std::ops::Range<NodeId> {
        0..self.nodes.len()
    }

    /// Children of a node
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node].children
    }

    /// Parent of a node (None for root)
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node].parent
    }

    /// Number of children of a node
    pub fn degree(&self, node: NodeId) -> usize {
        self.nodes[node].degree()
    }

    /// Whether a node is the root
    pub fn is_root(&self, node: NodeId) -> bool {
        self.nodes[node].is_root()
    }

    /// Whether a node has no children
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.nodes[node].is_leaf()
    }

    /// Distance from a node to the root
    pub fn depth(&self, mut node: NodeId) -> usize {
        let mut depth = 0;
        while let Some(parent) = self.nodes[node].parent {
            depth += 1;
            node = parent;
        }
        depth
    }

    /// Number of nodes in the subtree rooted at `node`, including itself
    pub fn subtree_size(&self, node: NodeId) -> usize {
        1 + self.children(node)
            .iter()
            .map(|&child| self.subtree_size(child))
            .sum::<usize>()
    }

    /// Subtree sizes for every node, indexed by id
    pub fn subtree_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![1; self.size()];
        // Pre-order ids: every child has a larger id than its parent.
        for node in self.node_ids().rev() {
            if let Some(parent) = self.nodes[node].parent {
                sizes[parent] += sizes[node];
            }
        }
        sizes
    }

    /// Path from `node` up to the root, both ends included
    pub fn path_to_root(&self, mut node: NodeId) -> Vec<NodeId> {
        let mut path = vec![node];
        while let Some(parent) = self.nodes[node].parent {
            path.push(parent);
            node = parent;
        }
        path
    }

    /// Count of leaf nodes
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Length of the longest root-to-leaf path, in edges
    pub fn height(&self) -> usize {
        self.node_ids().map(|node| self.depth(node)).max().unwrap_or(0)
    }
}

impl Default for RootedTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for RootedTree {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.canonical() == other.canonical()
    }
}

impl Eq for RootedTree {}

impl Hash for RootedTree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

/// Total ordering for trees (lexicographic on canonical forms)
impl Ord for RootedTree {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl PartialOrd for RootedTree {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl RootedTree {
    fn fmt_recursive(&self, f: &mut fmt::Formatter<'_>, node: NodeId, indent: usize) -> fmt::Result {
        for _ in 0..indent {
            write!(f, "  ")?;
        }
        writeln!(f, "● {}", node)?;

        for &child in self.children(node) {
            self.fmt_recursive(f, child, indent + 1)?;
        }
        Ok(())
    }
}

impl fmt::Debug for RootedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RootedTree(size={})", self.size())?;
        self.fmt_recursive(f, ROOT, 0)
    }
}

impl fmt::Display for RootedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl FromStr for RootedTree {
    type Err = crate::TreeFlipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RootedTree::from_canonical(s)
    }
}

// Trees cross serialization boundaries as their canonical string.
impl Serialize for RootedTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical())
    }
}

impl<'de> Deserialize<'de> for RootedTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let canonical = String::deserialize(deserializer)?;
        RootedTree::from_canonical(&canonical).map_err(serde::de::Error::custom)
    }
}
