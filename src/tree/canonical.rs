//! Canonical bracket form of rooted trees
//!
//! A leaf is `()`; an internal node is `(` followed by its children's forms
//! sorted ascending, then `)`. Two rooted trees have the same form iff they
//! are isomorphic with root mapped to root and children unordered.

use super::node::{NodeId, ROOT};
use super::{RootedTree, TreeBuilder};
use crate::{Result, TreeFlipError};

/// Canonical form of the single-node tree
pub const LEAF: &str = "()";

const OPEN: char = '(';
const CLOSE: char = ')';

impl RootedTree {
    /// Canonical form of the whole tree
    pub fn canonical(&self) -> String {
        self.canonical_at(ROOT)
    }

    /// Canonical form of the subtree rooted at `node`
    pub fn canonical_at(&self, node: NodeId) -> String {
        let children = self.children(node);
        if children.is_empty() {
            return LEAF.to_string();
        }

        let mut child_forms: Vec<String> = children
            .iter()
            .map(|&child| self.canonical_at(child))
            .collect();

        child_forms.sort();
        format!("({})", child_forms.join(""))
    }

    /// Check if this tree is isomorphic to another as a rooted tree
    pub fn is_isomorphic(&self, other: &RootedTree) -> bool {
        self == other
    }

    /// Parse a bracket string back into a tree
    ///
    /// Any balanced bracket string is accepted, sorted or not; the result's
    /// canonical form is the sorted version of the input.
    pub fn from_canonical(input: &str) -> Result<RootedTree> {
        let mut builder = TreeBuilder::new();
        let mut open: Vec<NodeId> = Vec::new();
        let mut closed = false;

        for (position, c) in input.char_indices() {
            if closed {
                return Err(parse_error(position, "trailing input after the root closes"));
            }
            match c {
                OPEN => {
                    let node = match open.last() {
                        Some(&parent) => builder.add_leaf(parent),
                        None => ROOT,
                    };
                    open.push(node);
                }
                CLOSE => {
                    if open.pop().is_none() {
                        return Err(parse_error(position, "unmatched ')'"));
                    }
                    closed = open.is_empty();
                }
                other => {
                    return Err(parse_error(position, &format!("unexpected character {:?}", other)));
                }
            }
        }

        if !closed {
            let message = if input.is_empty() { "empty input" } else { "unclosed '('" };
            return Err(parse_error(input.len(), message));
        }

        builder.build()
    }
}

fn parse_error(position: usize, message: &str) -> TreeFlipError {
    TreeFlipError::Parse {
        position,
        message: message.to_string(),
    }
}
