//! # TreeFlip: rooted trees and their flip transform
//!
//! This library enumerates every unlabeled rooted tree on `n` nodes
//! (OEIS A000081), computes canonical bracket forms for deduplication, and
//! groups rooted trees into classes of "same tree, different root"
//! (the flip transform), whose count is OEIS A000055.
//!
//! ## Features
//!
//! - **Trees**: immutable arena-backed rooted trees with parent links
//! - **Generation**: partition-based recursive construction with a shared memo
//! - **Flip transform**: rerooting, unrooted signatures and clustering
//! - **Levels**: a counting facade for display and layout code

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Rooted tree representation and canonical forms
pub mod tree;

/// Rooted tree enumeration
pub mod generate;

/// Rerooting and unrooted equivalence classes
pub mod flip;

/// Reference counts from OEIS A000081 and A000055
pub mod oeis;

/// Level-indexed counting facade
pub mod levels;

/// Engine configuration
pub mod config;

/// Utility functions and helpers
pub mod utils;

// Re-export commonly used types
pub use tree::{NodeId, RootedTree, TreeBuilder, TreeNode};
pub use generate::{generate, RootedTreeGenerator, TreeCache};
pub use flip::{group_into_clusters, reroot, unrooted_signature, Cluster, FlipTransform, UnrootedTree};
pub use levels::{LevelMapping, LevelSummary};
pub use config::{EngineConfig, SignatureStrategy};

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum TreeFlipError {
    /// Invalid tree structure
    #[error("Invalid tree: {0}")]
    InvalidTree(String),

    /// Malformed canonical bracket string
    #[error("Parse error at {position}: {message}")]
    Parse {
        /// Byte offset of the offending character
        position: usize,
        /// What went wrong
        message: String,
    },

    /// Generation requested above the configured node ceiling
    #[error("Requested {requested} nodes, the limit is {max}")]
    SizeLimit {
        /// Requested node count
        requested: usize,
        /// Configured ceiling
        max: usize,
    },

    /// Node id outside the tree
    #[error("Node {node} out of range for a tree of {size} nodes")]
    NodeOutOfRange {
        /// Offending node id
        node: NodeId,
        /// Size of the tree
        size: usize,
    },

    /// Generated data disagrees with a known invariant
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, TreeFlipError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        tree::{RootedTree, TreeBuilder, NodeId, ROOT},
        generate::{generate, RootedTreeGenerator, TreeCache},
        flip::{reroot, unrooted_signature, group_into_clusters, Cluster, FlipTransform, UnrootedTree},
        levels::{LevelMapping, LevelSummary},
        config::{EngineConfig, SignatureStrategy},
        Result, TreeFlipError,
    };
}
