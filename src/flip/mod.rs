//! Rerooting and the flip transform
//!
//! A rooted tree is rerooted by reversing the edges on the path between the
//! old and new roots. The smallest canonical form over all rootings is an
//! invariant of the underlying unrooted tree, and grouping generated rooted
//! trees by it yields one cluster per unrooted tree.

mod reroot;
mod signature;
mod cluster;

pub use reroot::{reroot, all_rootings};
pub use signature::{
    unrooted_signature, centroid_signature, centroids, signature_with,
    same_unrooted_class, UnrootedTree,
};
pub use cluster::{group_into_clusters, Cluster, FlipTransform};
