//! Level-indexed counting facade
//!
//! Display and layout code talks about "levels" rather than node counts:
//! level `L` corresponds to rooted trees on `L + 1` nodes. Levels outside
//! `0..=MAX_LEVEL`, or whose trees exceed the generator's node ceiling, are
//! valid queries with empty answers.

mod summary;

pub use summary::LevelSummary;

use crate::config::EngineConfig;
use crate::flip::{Cluster, FlipTransform};
use crate::generate::{RootedTreeGenerator, TreeSet};
use crate::oeis;
use crate::Result;
use std::sync::Arc;

/// Highest supported level
pub const MAX_LEVEL: usize = oeis::MAX_TABULATED - 1;

/// Maps levels to generated trees, counts and clusters
#[derive(Clone, Debug, Default)]
pub struct LevelMapping {
    generator: RootedTreeGenerator,
    flip: FlipTransform,
}

impl LevelMapping {
    /// Create a mapping with the default configuration and shared cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapping from an explicit configuration
    pub fn from_config(config: &EngineConfig) -> Self {
        LevelMapping {
            generator: RootedTreeGenerator::from_config(config),
            flip: FlipTransform::from_config(config),
        }
    }

    /// Replace the generator, e.g. to isolate its cache
    pub fn with_generator(mut self, generator: RootedTreeGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// The underlying generator
    pub fn generator(&self) -> &RootedTreeGenerator {
        &self.generator
    }

    /// Node count of the trees at `level`, if the level is supported
    fn nodes_for(&self, level: usize) -> Option<usize> {
        if level > MAX_LEVEL {
            return None;
        }
        let n = level + 1;
        (n <= self.generator.max_nodes()).then_some(n)
    }

    /// Number of rooted trees (terms) at `level`
    pub fn term_count(&self, level: usize) -> usize {
        self.nodes_for(level)
            .and_then(oeis::rooted_count)
            .unwrap_or(0)
    }

    /// Number of unrooted classes (clusters) at `level`
    pub fn cluster_count(&self, level: usize) -> usize {
        self.nodes_for(level)
            .and_then(oeis::unrooted_count)
            .unwrap_or(0)
    }

    /// Node count reported for `level`: the level itself
    pub fn node_count(&self, level: usize) -> usize {
        self.nodes_for(level).map_or(0, |_| level)
    }

    /// Generated rooted trees at `level`
    pub fn trees(&self, level: usize) -> Result<TreeSet> {
        match self.nodes_for(level) {
            Some(n) => self.generator.generate(n),
            None => Ok(Arc::from(Vec::new())),
        }
    }

    /// Canonical forms of every rooted tree at `level`
    pub fn canonical_forms(&self, level: usize) -> Result<Vec<String>> {
        Ok(self.trees(level)?.iter().map(|t| t.canonical()).collect())
    }

    /// Clusters of rooted trees at `level`
    pub fn clusters(&self, level: usize) -> Result<Vec<Cluster>> {
        let trees = self.trees(level)?;
        self.flip.group(&trees)
    }

    /// Canonical forms grouped by cluster at `level`
    pub fn cluster_forms(&self, level: usize) -> Result<Vec<Vec<String>>> {
        Ok(self.clusters(level)?
            .iter()
            .map(|cluster| cluster.canonical_forms())
            .collect())
    }

    /// Everything display code needs about `level`
    pub fn summary(&self, level: usize) -> Result<LevelSummary> {
        let trees = self.trees(level)?;
        let clusters = self.flip.group(&trees)?;

        Ok(LevelSummary {
            level,
            term_count: trees.len(),
            cluster_count: clusters.len(),
            node_count: self.node_count(level),
            canonical_forms: trees.iter().map(|t| t.canonical()).collect(),
            cluster_sizes: clusters.iter().map(|c| c.len()).collect(),
        })
    }

    /// Summaries for every supported level
    pub fn summaries(&self) -> Result<Vec<LevelSummary>> {
        (0..=MAX_LEVEL).map(|level| self.summary(level)).collect()
    }
}
