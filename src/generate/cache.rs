//! Memo cache for generated trees

use crate::tree::RootedTree;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use once_cell::sync::Lazy;

/// Shared trees for one node count
pub type TreeSet = Arc<[RootedTree]>;

/// Process-wide cache used by [`RootedTreeGenerator::new`](super::RootedTreeGenerator::new)
pub(crate) static DEFAULT_CACHE: Lazy<Arc<TreeCache>> =
    Lazy::new(|| Arc::new(TreeCache::new()));

/// Memoized generation results keyed by node count
///
/// Results for a given `n` never change, so a racing second insert is simply
/// dropped in favour of the first. A poisoned lock still holds complete
/// entries and is read through.
#[derive(Debug, Default)]
pub struct TreeCache {
    entries: RwLock<HashMap<usize, TreeSet>>,
}

impl TreeCache {
    /// Create an empty cache
    pub fn new() -> Self {
        TreeCache {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Cached trees for `n`, if any
    pub fn get(&self, n: usize) -> Option<TreeSet> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&n)
            .cloned()
    }

    /// Store the trees for `n`, returning whichever set ends up cached
    pub fn insert(&self, n: usize, trees: Vec<RootedTree>) -> TreeSet {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.entry(n).or_insert_with(|| Arc::from(trees)).clone()
    }

    /// Whether `n` has been generated
    pub fn contains(&self, n: usize) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&n)
    }

    /// Number of cached node counts
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Check if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached entry
    pub fn clear(&self) {
        self.entries.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let cache = TreeCache::new();
        assert!(cache.is_empty());
        assert!(cache.get(1).is_none());

        cache.insert(1, vec![RootedTree::new()]);
        assert!(cache.contains(1));
        assert_eq!(cache.get(1).unwrap().len(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_first_insert_wins() {
        let cache = TreeCache::new();
        let first = cache.insert(2, vec![RootedTree::new()]);
        let second = cache.insert(2, Vec::new());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.get(2).unwrap().len(), 1);
    }

    #[test]
    fn test_clear() {
        let cache = TreeCache::new();
        cache.insert(1, vec![RootedTree::new()]);
        cache.clear();
        assert!(cache.is_empty());
    }
}
