//! Recursive rooted tree generation

use super::cache::{TreeCache, TreeSet, DEFAULT_CACHE};
use super::partition::{partitions, slot_combinations};
use crate::config::EngineConfig;
use crate::tree::{RootedTree, TreeBuilder, ROOT};
use crate::{Result, TreeFlipError};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Generator for all rooted trees with `n` nodes
///
/// A rooted tree on `n` nodes is a root whose subtree sizes partition `n - 1`.
/// Every partition is filled with already generated smaller trees, so results
/// for each size are memoized in a [`TreeCache`] and shared between calls.
#[derive(Clone, Debug)]
pub struct RootedTreeGenerator {
    cache: Arc<TreeCache>,
    max_nodes: usize,
}

impl RootedTreeGenerator {
    /// Generator backed by the process-wide cache and the default ceiling
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    /// Generator backed by the process-wide cache
    pub fn from_config(config: &EngineConfig) -> Self {
        RootedTreeGenerator {
            cache: Arc::clone(&DEFAULT_CACHE),
            max_nodes: config.max_nodes,
        }
    }

    /// Use an explicit cache instead of the process-wide one
    pub fn with_cache(mut self, cache: Arc<TreeCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Set the largest tree size that may be requested
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// The cache this generator reads and fills
    pub fn cache(&self) -> &Arc<TreeCache> {
        &self.cache
    }

    /// Largest tree size that may be requested
    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// All distinct rooted trees with `n` nodes, A000081(n) of them
    ///
    /// `n == 0` yields an empty set. Sizes above the ceiling fail with
    /// [`TreeFlipError::SizeLimit`] instead of running for a very long time.
    /// Output order is enumeration order and carries no meaning.
    pub fn generate(&self, n: usize) -> Result<TreeSet> {
        if n == 0 {
            return Ok(Arc::from(Vec::new()));
        }
        if n > self.max_nodes {
            return Err(TreeFlipError::SizeLimit {
                requested: n,
                max: self.max_nodes,
            });
        }

        if let Some(trees) = self.cache.get(n) {
            debug!(n, count = trees.len(), "tree cache hit");
            return Ok(trees);
        }

        let trees = self.generate_uncached(n)?;
        info!(n, count = trees.len(), "generated rooted trees");
        Ok(self.cache.insert(n, trees))
    }

    #[instrument(skip(self), level = "debug")]
    fn generate_uncached(&self, n: usize) -> Result<Vec<RootedTree>> {
        if n == 1 {
            return Ok(vec![RootedTree::new()]);
        }

        let mut trees = Vec::new();
        let mut seen = HashSet::new();

        for parts in partitions(n - 1) {
            let slots = parts
                .iter()
                .map(|&part| self.generate(part))
                .collect::<Result<Vec<_>>>()?;
            let candidates: Vec<usize> = slots.iter().map(|slot| slot.len()).collect();

            let combinations = slot_combinations(&parts, &candidates);
            debug!(?parts, combinations = combinations.len(), "filling partition");

            for choice in combinations {
                let mut builder = TreeBuilder::new();
                for (slot, &index) in slots.iter().zip(&choice) {
                    builder.graft(ROOT, &slot[index]);
                }
                let tree = builder.build()?;

                let canonical = tree.canonical();
                let fresh = seen.insert(canonical.clone());
                debug_assert!(fresh, "duplicate rooted tree {} for n = {}", canonical, n);
                if fresh {
                    trees.push(tree);
                } else {
                    warn!(n, %canonical, "duplicate tree filtered");
                }
            }
        }

        Ok(trees)
    }
}

impl Default for RootedTreeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// All rooted trees with `n` nodes using the shared cache and default ceiling
pub fn generate(n: usize) -> Result<TreeSet> {
    RootedTreeGenerator::new().generate(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn isolated() -> RootedTreeGenerator {
        RootedTreeGenerator::new().with_cache(Arc::new(TreeCache::new()))
    }

    fn forms(trees: &[RootedTree]) -> Vec<String> {
        let mut forms: Vec<String> = trees.iter().map(|t| t.canonical()).collect();
        forms.sort();
        forms
    }

    #[test]
    fn test_zero_is_empty() {
        assert!(isolated().generate(0).unwrap().is_empty());
    }

    #[test]
    fn test_small_sizes() {
        let generator = isolated();
        assert_eq!(forms(&generator.generate(1).unwrap()), vec!["()"]);
        assert_eq!(forms(&generator.generate(2).unwrap()), vec!["(())"]);
        assert_eq!(forms(&generator.generate(3).unwrap()), vec!["((()))", "(()())"]);
        assert_eq!(
            forms(&generator.generate(4).unwrap()),
            vec!["(((())))", "((()()))", "((())())", "(()()())"]
        );
    }

    #[test]
    fn test_memoized() {
        let generator = isolated();
        let first = generator.generate(5).unwrap();
        // smaller sizes were filled on the way
        for n in 1..=5 {
            assert!(generator.cache().contains(n));
        }
        let second = generator.generate(5).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_size_limit() {
        let generator = isolated().with_max_nodes(4);
        assert!(generator.generate(4).is_ok());
        assert!(matches!(
            generator.generate(5),
            Err(TreeFlipError::SizeLimit { requested: 5, max: 4 })
        ));
    }

    #[test]
    fn test_every_tree_has_n_nodes() {
        let generator = isolated();
        for n in 1..=7 {
            for tree in generator.generate(n).unwrap().iter() {
                assert_eq!(tree.size(), n);
            }
        }
    }

    #[test]
    fn test_no_duplicate_forms() {
        let generator = isolated();
        for n in 1..=9 {
            let trees = generator.generate(n).unwrap();
            let mut distinct = forms(&trees);
            distinct.dedup();
            assert_eq!(distinct.len(), trees.len());
        }
    }

    #[test]
    fn test_shared_cache_function() {
        assert_eq!(generate(6).unwrap().len(), 20);
    }
}
