//! Flip transform: grouping rooted trees into unrooted classes

use super::signature::signature_with;
use crate::config::{EngineConfig, SignatureStrategy};
use crate::tree::RootedTree;
use crate::Result;
use std::collections::BTreeMap;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, instrument};

/// Rooted trees sharing one unrooted signature
#[derive(Clone, Debug, Serialize)]
pub struct Cluster {
    signature: String,
    trees: Vec<RootedTree>,
}

impl Cluster {
    /// Signature shared by every member
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Members in input order
    pub fn trees(&self) -> &[RootedTree] {
        &self.trees
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Always false for clusters produced by grouping
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Canonical forms of the members
    pub fn canonical_forms(&self) -> Vec<String> {
        self.trees.iter().map(|t| t.canonical()).collect()
    }
}

/// Groups rooted trees by unrooted signature
#[derive(Clone, Copy, Debug)]
pub struct FlipTransform {
    strategy: SignatureStrategy,
    parallel_threshold: usize,
}

impl FlipTransform {
    /// Transform with the default configuration
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    /// Transform configured from `config`
    pub fn from_config(config: &EngineConfig) -> Self {
        FlipTransform {
            strategy: config.signature,
            parallel_threshold: config.parallel_threshold,
        }
    }

    /// Use a different signature strategy
    pub fn with_strategy(mut self, strategy: SignatureStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Active signature strategy
    pub fn strategy(&self) -> SignatureStrategy {
        self.strategy
    }

    /// Signature of a single tree under the active strategy
    pub fn signature(&self, tree: &RootedTree) -> Result<String> {
        signature_with(tree, self.strategy)
    }

    /// Partition `trees` into clusters, ordered by signature
    #[instrument(skip_all, fields(trees = trees.len(), strategy = ?self.strategy))]
    pub fn group(&self, trees: &[RootedTree]) -> Result<Vec<Cluster>> {
        // For large inputs, parallelize the signature sweep
        let use_parallel = trees.len() > self.parallel_threshold;

        let signatures: Vec<String> = if use_parallel {
            trees.par_iter()
                .map(|tree| self.signature(tree))
                .collect::<Result<_>>()?
        } else {
            trees.iter()
                .map(|tree| self.signature(tree))
                .collect::<Result<_>>()?
        };

        let mut by_signature: BTreeMap<String, Vec<RootedTree>> = BTreeMap::new();
        for (signature, tree) in signatures.into_iter().zip(trees) {
            by_signature.entry(signature).or_default().push(tree.clone());
        }

        debug!(clusters = by_signature.len(), use_parallel, "grouped trees");

        Ok(by_signature
            .into_iter()
            .map(|(signature, trees)| Cluster { signature, trees })
            .collect())
    }
}

impl Default for FlipTransform {
    fn default() -> Self {
        Self::new()
    }
}

/// Partition `trees` into clusters using the default configuration
pub fn group_into_clusters(trees: &[RootedTree]) -> Result<Vec<Cluster>> {
    FlipTransform::new().group(trees)
}
