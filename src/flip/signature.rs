//! Unrooted signatures: root-independent canonical forms

use super::reroot::reroot;
use crate::config::SignatureStrategy;
use crate::tree::{NodeId, RootedTree};
use crate::Result;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// Smallest canonical form over every rooting of `tree`
///
/// Two rooted trees share this signature iff they are rootings of the same
/// unrooted tree.
pub fn unrooted_signature(tree: &RootedTree) -> Result<String> {
    let mut best = tree.canonical();
    for node in tree.node_ids().skip(1) {
        let form = reroot(tree, node)?.canonical();
        if form < best {
            best = form;
        }
    }
    Ok(best)
}

/// Nodes whose removal leaves no component larger than half the tree
///
/// Every tree has one centroid or two adjacent ones.
pub fn centroids(tree: &RootedTree) -> Vec<NodeId> {
    let n_nodes = tree.size();
    let sizes = tree.subtree_sizes();

    tree.node_ids()
        .filter(|&node| {
            let below = tree.children(node)
                .iter()
                .map(|&child| sizes[child])
                .max()
                .unwrap_or(0);
            let above = n_nodes - sizes[node];
            below.max(above) <= n_nodes / 2
        })
        .collect()
}

/// Smallest canonical form over the centroid rootings only
///
/// Centroids are preserved by isomorphism, so this is also a complete
/// unrooted invariant, at the cost of at most two reroots instead of `n`.
/// It generally differs from [`unrooted_signature`] as a string.
pub fn centroid_signature(tree: &RootedTree) -> Result<String> {
    let mut best: Option<String> = None;
    for node in centroids(tree) {
        let form = reroot(tree, node)?.canonical();
        if best.as_ref().map_or(true, |b| form < *b) {
            best = Some(form);
        }
    }
    Ok(best.unwrap_or_else(|| tree.canonical()))
}

/// Signature of `tree` under the chosen strategy
pub fn signature_with(tree: &RootedTree, strategy: SignatureStrategy) -> Result<String> {
    match strategy {
        SignatureStrategy::AllRootings => unrooted_signature(tree),
        SignatureStrategy::Centroid => centroid_signature(tree),
    }
}

/// Check if two rooted trees are rootings of the same unrooted tree
pub fn same_unrooted_class(a: &RootedTree, b: &RootedTree) -> Result<bool> {
    if a.size() != b.size() {
        return Ok(false);
    }
    Ok(unrooted_signature(a)? == unrooted_signature(b)?)
}

/// An unrooted tree, represented by one of its rootings
///
/// Equality, ordering and hashing use the unrooted signature only.
#[derive(Clone, Debug)]
pub struct UnrootedTree {
    representative: RootedTree,
    signature: String,
}

impl UnrootedTree {
    /// Wrap a rooted tree, computing its unrooted signature
    pub fn new(representative: RootedTree) -> Result<Self> {
        let signature = unrooted_signature(&representative)?;
        Ok(UnrootedTree {
            representative,
            signature,
        })
    }

    /// The rooted tree this was built from
    pub fn representative(&self) -> &RootedTree {
        &self.representative
    }

    /// The unrooted signature
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.representative.size()
    }

    /// Canonical forms of all distinct rooted trees in this class, sorted
    pub fn rooted_forms(&self) -> Result<Vec<String>> {
        let mut forms = BTreeSet::new();
        for node in self.representative.node_ids() {
            forms.insert(reroot(&self.representative, node)?.canonical());
        }
        Ok(forms.into_iter().collect())
    }
}

impl PartialEq for UnrootedTree {
    fn eq(&self, other: &Self) -> bool {
        self.signature == other.signature
    }
}

impl Eq for UnrootedTree {}

impl Hash for UnrootedTree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.signature.hash(state);
    }
}

impl Ord for UnrootedTree {
    fn cmp(&self, other: &Self) -> Ordering {
        self.signature.cmp(&other.signature)
    }
}

impl PartialOrd for UnrootedTree {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
