//! Utility functions for TreeFlip

use crate::tree::{RootedTree, TreeBuilder};
use rand::Rng;

/// Generate a random rooted tree of given size
///
/// Each new node picks a uniformly random parent among the nodes before it.
/// This is not uniform over isomorphism classes. Used to feed the signature
/// benchmarks with trees far beyond the generated sizes. `size == 0` yields
/// the single-node tree.
pub fn random_tree<R: Rng + ?Sized>(size: usize, rng: &mut R) -> RootedTree {
    let mut builder = TreeBuilder::new();

    // Build tree by adding nodes one by one
    for node in 1..size {
        let parent = rng.gen_range(0..node);
        builder.add_child(parent, node);
    }

    // Parents always precede children, so the structure is a valid tree.
    builder.build().unwrap_or_default()
}

/// Generate a random tree from a fixed parent table: `parents[i]` is taken
/// modulo `i + 1` and becomes the parent of node `i + 1`
pub fn tree_from_parent_choices(parents: &[usize]) -> RootedTree {
    let mut builder = TreeBuilder::new();
    for (index, &choice) in parents.iter().enumerate() {
        builder.add_child(choice % (index + 1), index + 1);
    }
    builder.build().unwrap_or_default()
}

/// Timing utilities
pub mod timing {
    use std::time::Instant;
    use tracing::info;

    /// Simple timer that logs its lifetime when dropped
    pub struct Timer {
        start: Instant,
        name: String,
    }

    impl Timer {
        /// Start new timer
        pub fn new(name: &str) -> Self {
            Timer {
                start: Instant::now(),
                name: name.to_string(),
            }
        }

        /// Get elapsed time in seconds
        pub fn elapsed(&self) -> f32 {
            self.start.elapsed().as_secs_f32()
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            info!(timer = %self.name, seconds = self.elapsed(), "elapsed");
        }
    }
}
