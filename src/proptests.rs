use std::collections::BTreeSet;

use proptest::collection::vec;
use proptest::prelude::*;

use crate::node::Color;
use crate::tree::Tree;

fn validate(tree: &Tree<i32>) {
    tree.validate_order();
    tree.validate_colors();
    tree.validate_black_height();
    tree.validate_links();
}

/**
 * Snapshot of the tree shape: per generation, the value and color at each
 * position, sentinels included.
 */
fn shape(tree: &Tree<i32>) -> Vec<Vec<(Option<i32>, Color)>> {
    tree.generation_layers()
        .iter()
        .map(|layer| {
            layer
                .iter()
                .map(|&id| (tree.value(id), tree.color(id)))
                .collect()
        })
        .collect()
}

proptest! {

    #[test]
    fn balanced_insertion_maintains_the_red_black_invariants(
        values in vec(-1000i32..1000, 0..300),
    ) {
        let mut tree = Tree::new();
        for &x in &values {
            tree.insert_balanced(x);
        }
        validate(&tree);
    }

    #[test]
    fn in_order_traversal_yields_the_sorted_unique_values(
        values in vec(-1000i32..1000, 0..300),
    ) {
        let tree: Tree<i32> = values.iter().copied().collect();
        let expected: Vec<i32> = values
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        prop_assert_eq!(tree.in_order(), expected);
    }

    #[test]
    fn height_stays_within_twice_the_logarithmic_bound(
        values in vec(-10_000i32..10_000, 0..500),
    ) {
        let tree: Tree<i32> = values.iter().copied().collect();
        let n = tree.len() as f64;
        prop_assert!((tree.height() as f64) <= 2.0 * (n + 1.0).log2());
    }

    #[test]
    fn reinserting_a_present_value_changes_nothing(
        values in vec(-100i32..100, 1..100),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tree: Tree<i32> = values.iter().copied().collect();
        let before = shape(&tree);

        let x = values[pick.index(values.len())];
        prop_assert!(!tree.insert_balanced(x));
        prop_assert!(!tree.insert_plain(x));

        prop_assert_eq!(shape(&tree), before);
    }

    #[test]
    fn plain_insertion_keeps_search_order_only(
        values in vec(-1000i32..1000, 0..200),
    ) {
        let mut tree = Tree::new();
        for &x in &values {
            tree.insert_plain(x);
        }
        tree.validate_order();
        tree.validate_links();
        let expected: Vec<i32> = values
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        prop_assert_eq!(tree.in_order(), expected);
    }

    #[test]
    fn rotation_round_trips_preserve_the_value_sequence(
        values in vec(-1000i32..1000, 3..100),
    ) {
        let mut tree: Tree<i32> = values.iter().copied().collect();
        let before = tree.in_order();
        let root = tree.root();

        if tree.left(root).map_or(false, |l| !tree.is_empty(l)) {
            tree.rotate_right(root);
            tree.rotate_left(root);
            prop_assert_eq!(tree.in_order(), before.clone());
            tree.validate_order();
            tree.validate_links();
        }
        if tree.right(root).map_or(false, |r| !tree.is_empty(r)) {
            tree.rotate_left(root);
            tree.rotate_right(root);
            prop_assert_eq!(tree.in_order(), before.clone());
            tree.validate_order();
            tree.validate_links();
        }
    }
}
