//! Rerooting a tree at an arbitrary node

use crate::tree::{NodeId, RootedTree, TreeBuilder, ROOT};
use crate::{Result, TreeFlipError};

/// Build the tree obtained by making `new_root` the root
///
/// Walking from `new_root` up to the old root, each node on that path becomes
/// the child of the node below it. Subtrees hanging off the path are copied
/// with their orientation unchanged. Adjacency is preserved, so the result is
/// the same unrooted tree.
pub fn reroot(tree: &RootedTree, new_root: NodeId) -> Result<RootedTree> {
    if new_root >= tree.size() {
        return Err(TreeFlipError::NodeOutOfRange {
            node: new_root,
            size: tree.size(),
        });
    }
    if new_root == ROOT {
        return Ok(tree.clone());
    }

    let path = tree.path_to_root(new_root);
    let mut builder = TreeBuilder::new();

    for &child in tree.children(new_root) {
        builder.graft_subtree(ROOT, tree, child);
    }

    // path[i + 1] was the parent of path[i]; flip that edge and keep the
    // other children of path[i + 1]. A node's parent is never among its
    // children, so only the on-path child needs skipping.
    let mut attach = ROOT;
    for step in path.windows(2) {
        let (below, node) = (step[0], step[1]);
        let flipped = builder.add_leaf(attach);
        for &child in tree.children(node) {
            if child != below {
                builder.graft_subtree(flipped, tree, child);
            }
        }
        attach = flipped;
    }

    builder.build()
}

/// Every rooting of `tree`, indexed by the node chosen as root
pub fn all_rootings(tree: &RootedTree) -> Result<Vec<RootedTree>> {
    tree.node_ids().map(|node| reroot(tree, node)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(form: &str) -> RootedTree {
        RootedTree::from_canonical(form).unwrap()
    }

    #[test]
    fn test_reroot_at_root_is_identity() {
        let tree = parse("((())(()()))");
        assert_eq!(reroot(&tree, ROOT).unwrap().canonical(), tree.canonical());
    }

    #[test]
    fn test_path_of_three() {
        let path = parse("((()))");
        assert_eq!(reroot(&path, 1).unwrap().canonical(), "(()())");
        assert_eq!(reroot(&path, 2).unwrap().canonical(), "((()))");
    }

    #[test]
    fn test_off_path_subtrees_keep_orientation() {
        // 0 -> {1 -> {2}, 3}: the path 3 - 0 - 1 - 2
        let tree = parse("((())())");
        assert_eq!(tree.children(ROOT), &[1usize, 3]);
        assert_eq!(reroot(&tree, 1).unwrap().canonical(), "((())())");
        assert_eq!(reroot(&tree, 2).unwrap().canonical(), "(((())))");
        assert_eq!(reroot(&tree, 3).unwrap().canonical(), "(((())))");
    }

    #[test]
    fn test_star_rerooted_at_leaf() {
        let star = parse("(()()()())");
        assert_eq!(reroot(&star, 1).unwrap().canonical(), "((()()()))");
    }

    #[test]
    fn test_deep_path_reversal() {
        // 0 -> {1 -> {2 -> {3 -> {4}}, 5}, 6 -> {7}}
        let mut builder = TreeBuilder::new();
        builder.add_child(0, 1)
            .add_child(1, 2)
            .add_child(2, 3)
            .add_child(3, 4)
            .add_child(1, 5)
            .add_child(0, 6)
            .add_child(6, 7);
        let tree = builder.build().unwrap();

        let rerooted = reroot(&tree, 4).unwrap();
        assert_eq!(rerooted.size(), 8);
        // 4 - 3 - 2 - 1 - {5, 0 - 6 - 7}
        assert_eq!(rerooted.canonical(), "((((((()))()))))");
    }

    #[test]
    fn test_new_root_degree() {
        let tree = parse("((()())(()))");
        for node in tree.node_ids() {
            let rerooted = reroot(&tree, node).unwrap();
            let expected = tree.degree(node) + usize::from(node != ROOT);
            assert_eq!(rerooted.degree(ROOT), expected);
            assert_eq!(rerooted.size(), tree.size());
        }
    }

    #[test]
    fn test_out_of_range() {
        let tree = parse("(())");
        assert!(matches!(
            reroot(&tree, 2),
            Err(TreeFlipError::NodeOutOfRange { node: 2, size: 2 })
        ));
    }

    #[test]
    fn test_all_rootings() {
        let tree = parse("(()())");
        let forms: Vec<String> = all_rootings(&tree).unwrap().iter().map(|t| t.canonical()).collect();
        assert_eq!(forms, vec!["(()())", "((()))", "((()))"]);
    }
}
