//! Rooted tree representation and canonical forms

mod node;
mod rooted;
mod builder;
mod canonical;

pub use node::{NodeId, TreeNode, ROOT};
pub use rooted::RootedTree;
pub use builder::TreeBuilder;
pub use canonical::LEAF;
