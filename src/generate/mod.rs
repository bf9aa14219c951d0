//! Enumeration of unlabeled rooted trees by node count

mod partition;
mod cache;
mod generator;

pub use partition::{partitions, slot_combinations};
pub use cache::{TreeCache, TreeSet};
pub use generator::{generate, RootedTreeGenerator};
