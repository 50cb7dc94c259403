use crate::node::Node;
use crate::tree::Tree;




/**
 * Subtree rotations. Both operations are O(1) and preserve the in-order
 * sequence of values; the black-height of the rotated subtree may change
 * and is corrected by the caller, not here.
 *
 * The rotations preserve the identity of the pivot index: a new node is
 * synthesized to take over the subtree that moves away, and the pivot slot
 * is overwritten with the value and color of the child that rises. A
 * caller holding the pivot index before the call keeps referring to the
 * node occupying the rotated-into position afterwards, which is what lets
 * the fixup keep operating on fixed indices across restructurings. The
 * absorbed child slot ends up unreferenced and is retired to an inert
 * sentinel; it is never reused. A stale index to the absorbed slot
 * therefore reads as an empty, parentless node, not as the value that
 * moved — only the pivot index survives a rotation meaningfully.
 */
// ============================================================================
impl<T: Ord + Copy> Tree<T> {

    /**
     * Rotate the subtree rooted at `pivot` to the right:
     *
     * ```text
     *     d~pivot               b~pivot
     *      / \       ----->      / \
     *     b   E                 A   d
     *    / \                       / \
     *   A   C                     C   E
     * ```
     *
     * `pivot` and its left child must be value-bearing; rotating a
     * sentinel into an interior position is a logic error and fails fast.
     */
    pub(crate) fn rotate_right(&mut self, pivot: usize) {
        let (b, e) = self.children(pivot);
        let (a, c) = self.children(b);

        let d = self.synthesize(pivot, c, e);
        self.nodes[c].p = Some(d);
        self.nodes[e].p = Some(d);

        self.nodes[pivot].value = self.nodes[b].value;
        self.nodes[pivot].color = self.nodes[b].color;
        self.nodes[pivot].l = Some(a);
        self.nodes[pivot].r = Some(d);
        self.nodes[a].p = Some(pivot);

        // Nothing references the absorbed slot any more.
        self.nodes[b] = Node::empty(None);
    }

    /**
     * Rotate the subtree rooted at `pivot` to the left; the mirror image
     * of `rotate_right`:
     *
     * ```text
     *     b~pivot               d~pivot
     *      / \       ----->      / \
     *     A   d                 b   E
     *        / \               / \
     *       C   E             A   C
     * ```
     */
    pub(crate) fn rotate_left(&mut self, pivot: usize) {
        let (a, d) = self.children(pivot);
        let (c, e) = self.children(d);

        let b = self.synthesize(pivot, a, c);
        self.nodes[a].p = Some(b);
        self.nodes[c].p = Some(b);

        self.nodes[pivot].value = self.nodes[d].value;
        self.nodes[pivot].color = self.nodes[d].color;
        self.nodes[pivot].l = Some(b);
        self.nodes[pivot].r = Some(e);
        self.nodes[e].p = Some(pivot);

        self.nodes[d] = Node::empty(None);
    }

    /**
     * Push a new node carrying the pivot's current value and color, wired
     * to the given children and parented to the pivot.
     */
    fn synthesize(&mut self, pivot: usize, l: usize, r: usize) -> usize {
        self.nodes.push(Node {
            value: self.nodes[pivot].value,
            color: self.nodes[pivot].color,
            l: Some(l),
            r: Some(r),
            p: Some(pivot),
        });
        self.nodes.len() - 1
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use crate::tree::Tree;

    #[test]
    fn rotation_round_trip_preserves_in_order_sequence() {
        let mut tree: Tree<i32> = [4, 2, 6, 1, 3, 5, 7].iter().copied().collect();
        let before = tree.in_order();

        let root = tree.root();
        tree.rotate_right(root);
        assert_eq!(tree.in_order(), before);

        tree.rotate_left(root);
        assert_eq!(tree.in_order(), before);
        tree.validate_order();
        tree.validate_links();
    }

    #[test]
    fn rotation_preserves_the_pivot_index() {
        let mut tree: Tree<i32> = [4, 2, 6, 1, 3, 5, 7].iter().copied().collect();
        let root = tree.root();

        // The left child's value rises into the pivot slot.
        tree.rotate_right(root);
        assert_eq!(tree.value(root), Some(2));
        assert!(tree.is_root(root));
        assert_eq!(tree.value(tree.right(root).unwrap()), Some(4));

        tree.rotate_left(root);
        assert_eq!(tree.value(root), Some(4));
    }

    #[test]
    fn rotation_moves_colors_with_values() {
        use crate::node::Color;

        // 20 is the black root; 10 and 30 are its red children.
        let mut tree: Tree<i32> = [10, 20, 30].iter().copied().collect();
        let root = tree.root();

        tree.rotate_right(root);
        assert_eq!(tree.value(root), Some(10));
        assert_eq!(tree.color(root), Color::Red);
        assert_eq!(tree.color(tree.right(root).unwrap()), Color::Black);
    }

    #[test]
    fn rotation_below_the_root_keeps_the_parent_wiring() {
        let mut tree: Tree<i32> = [4, 2, 6, 1, 3, 5, 7].iter().copied().collect();
        let pivot = tree.left(tree.root()).unwrap();

        tree.rotate_right(pivot);
        assert_eq!(tree.left(tree.root()), Some(pivot));
        assert_eq!(tree.parent(pivot), Some(tree.root()));
        assert_eq!(tree.value(pivot), Some(1));
        assert_eq!(tree.in_order(), vec![1, 2, 3, 4, 5, 6, 7]);
        tree.validate_links();
    }

    #[test]
    fn retired_slots_read_as_inert_parentless_sentinels() {
        let mut tree: Tree<i32> = [10, 20, 30].iter().copied().collect();
        let root = tree.root();
        let absorbed = tree.left(root).unwrap();

        // The left child's value rises into the pivot; its old slot is
        // retired and no longer belongs to the tree.
        tree.rotate_right(root);
        assert!(tree.is_empty(absorbed));
        assert_eq!(tree.value(absorbed), None);
        assert_eq!(tree.parent(absorbed), None);
        assert!(tree.is_root(absorbed));
        assert_eq!(tree.generation(absorbed), 0);

        // The live tree no longer reaches the retired slot.
        let reachable: Vec<usize> = tree.generation_layers().into_iter().flatten().collect();
        assert!(!reachable.contains(&absorbed));
    }

    #[test]
    #[should_panic(expected = "sentinel nodes have no children")]
    fn rotating_a_sentinel_upward_fails_fast() {
        let mut tree = Tree::new();
        tree.insert_balanced(1);
        // The root is a leaf; its left child is a sentinel and cannot rise.
        tree.rotate_right(tree.root());
    }
}
