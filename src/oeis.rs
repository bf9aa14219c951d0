//! Reference counts for rooted and unrooted trees
//!
//! These tables are the correctness oracle for generation and clustering:
//! `generate(n)` must produce A000081(n) trees which must fall into
//! A000055(n) clusters.

use crate::flip::FlipTransform;
use crate::generate::RootedTreeGenerator;
use crate::{Result, TreeFlipError};
use tracing::info;

/// OEIS A000081: rooted trees with n unlabeled nodes, n = 0..=11
pub const A000081: [usize; 12] = [0, 1, 1, 2, 4, 9, 20, 48, 115, 286, 719, 1842];

/// OEIS A000055: unrooted trees with n unlabeled nodes, n = 0..=11
pub const A000055: [usize; 12] = [1, 1, 1, 1, 2, 3, 6, 11, 23, 47, 106, 235];

/// Largest `n` covered by the tables
pub const MAX_TABULATED: usize = A000081.len() - 1;

/// A000081(n), if tabulated
pub fn rooted_count(n: usize) -> Option<usize> {
    A000081.get(n).copied()
}

/// A000055(n), if tabulated
pub fn unrooted_count(n: usize) -> Option<usize> {
    A000055.get(n).copied()
}

/// Generate and cluster every size from 1 to `max_n` and compare against the
/// tables, using the default generator and transform
pub fn verify(max_n: usize) -> Result<()> {
    verify_with(&RootedTreeGenerator::new(), &FlipTransform::new(), max_n)
}

/// Same as [`verify`] with explicit components
pub fn verify_with(generator: &RootedTreeGenerator, flip: &FlipTransform, max_n: usize) -> Result<()> {
    if max_n > MAX_TABULATED {
        return Err(TreeFlipError::SizeLimit {
            requested: max_n,
            max: MAX_TABULATED,
        });
    }

    for n in 1..=max_n {
        let trees = generator.generate(n)?;
        if trees.len() != A000081[n] {
            return Err(TreeFlipError::InvariantViolation(format!(
                "generated {} rooted trees on {} nodes, expected {}",
                trees.len(),
                n,
                A000081[n]
            )));
        }

        let clusters = flip.group(&trees)?;
        if clusters.len() != A000055[n] {
            return Err(TreeFlipError::InvariantViolation(format!(
                "found {} clusters on {} nodes, expected {}",
                clusters.len(),
                n,
                A000055[n]
            )));
        }

        info!(n, terms = trees.len(), clusters = clusters.len(), "verified");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(rooted_count(5), Some(9));
        assert_eq!(unrooted_count(5), Some(3));
        assert_eq!(rooted_count(12), None);
        assert_eq!(unrooted_count(0), Some(1));
    }

    #[test]
    fn test_unrooted_never_exceeds_rooted() {
        for n in 1..=MAX_TABULATED {
            assert!(A000055[n] <= A000081[n]);
        }
    }

    #[test]
    fn test_verify_small() {
        verify(7).unwrap();
    }

    #[test]
    fn test_verify_beyond_tables() {
        assert!(matches!(
            verify(MAX_TABULATED + 1),
            Err(TreeFlipError::SizeLimit { .. })
        ));
    }

    #[test]
    fn test_verify_detects_ceiling() {
        let generator = RootedTreeGenerator::new().with_max_nodes(3);
        assert!(verify_with(&generator, &FlipTransform::new(), 4).is_err());
    }
}
