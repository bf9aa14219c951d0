//! Structural properties of generated trees and the flip transform

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use treeflip::flip::{all_rootings, centroid_signature, UnrootedTree};
use treeflip::prelude::*;
use treeflip::utils::tree_from_parent_choices;

fn isolated() -> RootedTreeGenerator {
    RootedTreeGenerator::new().with_cache(Arc::new(TreeCache::new()))
}

#[test]
fn generated_trees_have_n_nodes_and_distinct_forms() {
    let generator = isolated();
    for n in 1..=9 {
        let trees = generator.generate(n).unwrap();
        let mut seen = HashSet::new();
        for tree in trees.iter() {
            assert_eq!(tree.size(), n);
            assert!(seen.insert(tree.canonical()), "duplicate {}", tree);
        }
    }
}

#[test]
fn canonical_form_is_a_fixed_point() {
    let generator = isolated();
    for n in 1..=8 {
        for tree in generator.generate(n).unwrap().iter() {
            let form = tree.canonical();
            let parsed = RootedTree::from_canonical(&form).unwrap();
            assert_eq!(parsed.canonical(), form);
            assert_eq!(parsed.size(), n);
        }
    }
}

#[test]
fn clusters_separate_signatures() {
    let generator = isolated();
    for n in 1..=8 {
        let trees = generator.generate(n).unwrap();
        let clusters = group_into_clusters(&trees).unwrap();

        let mut signatures = HashSet::new();
        for cluster in &clusters {
            for tree in cluster.trees() {
                assert_eq!(unrooted_signature(tree).unwrap(), cluster.signature());
            }
            assert!(signatures.insert(cluster.signature().to_string()));
        }
    }
}

#[test]
fn cluster_members_are_exactly_the_distinct_rootings() {
    let generator = isolated();
    for n in 1..=8 {
        let trees = generator.generate(n).unwrap();
        for cluster in group_into_clusters(&trees).unwrap() {
            let unrooted = UnrootedTree::new(cluster.trees()[0].clone()).unwrap();
            let mut members = cluster.canonical_forms();
            members.sort();
            assert_eq!(members, unrooted.rooted_forms().unwrap());
        }
    }
}

fn parent_choices() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 0..14)
}

proptest! {
    #[test]
    fn reroot_preserves_size_and_signature(choices in parent_choices()) {
        let tree = tree_from_parent_choices(&choices);
        let signature = unrooted_signature(&tree).unwrap();
        for rerooted in all_rootings(&tree).unwrap() {
            prop_assert_eq!(rerooted.size(), tree.size());
            prop_assert_eq!(unrooted_signature(&rerooted).unwrap(), signature.clone());
        }
    }

    #[test]
    fn reroot_at_root_is_identity(choices in parent_choices()) {
        let tree = tree_from_parent_choices(&choices);
        prop_assert_eq!(reroot(&tree, 0).unwrap().canonical(), tree.canonical());
    }

    #[test]
    fn rerooting_back_restores_the_tree(choices in parent_choices(), pick in any::<usize>()) {
        let tree = tree_from_parent_choices(&choices);
        let node = pick % tree.size();
        let rerooted = reroot(&tree, node).unwrap();

        // some rooting of the rerooted tree is the original rooted tree
        let original = tree.canonical();
        let found = all_rootings(&rerooted)
            .unwrap()
            .iter()
            .any(|t| t.canonical() == original);
        prop_assert!(found);
    }

    #[test]
    fn centroid_and_min_signatures_induce_the_same_classes(
        a in parent_choices(),
        b in parent_choices(),
    ) {
        let x = tree_from_parent_choices(&a);
        let y = tree_from_parent_choices(&b);
        let by_min = unrooted_signature(&x).unwrap() == unrooted_signature(&y).unwrap();
        let by_centroid = centroid_signature(&x).unwrap() == centroid_signature(&y).unwrap();
        prop_assert_eq!(by_min, by_centroid);
    }

    #[test]
    fn parse_round_trips_random_trees(choices in parent_choices()) {
        let tree = tree_from_parent_choices(&choices);
        let parsed: RootedTree = tree.canonical().parse().unwrap();
        prop_assert_eq!(parsed, tree);
    }
}
