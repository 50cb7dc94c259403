use crate::tree::Tree;




/**
 * Read-only structural queries over the node graph. These are the surface
 * consumed by host programs (e.g. a visualization): they never mutate the
 * tree and never influence the insertion logic.
 */
// ============================================================================
impl<T: Ord + Copy> Tree<T> {

    /**
     * Height of the tree, counting only value-bearing nodes: 0 for an
     * empty tree or a lone leaf.
     */
    pub fn height(&self) -> usize {
        self.height_node(self.root)
    }

    fn height_node(&self, id: usize) -> usize {
        if self.is_empty(id) || self.is_leaf(id) {
            0
        } else {
            let (l, r) = self.children(id);
            1 + self.height_node(l).max(self.height_node(r))
        }
    }

    /**
     * Number of black nodes on the deepest path below the root. After a
     * completed balanced insertion every root-to-sentinel path agrees on
     * this count.
     */
    pub fn black_height(&self) -> usize {
        self.black_height_node(self.root)
    }

    fn black_height_node(&self, id: usize) -> usize {
        if self.is_empty(id) {
            0
        } else {
            let (l, r) = self.children(id);
            let h = if self.is_black(id) { 1 } else { 0 };
            h + self.black_height_node(l).max(self.black_height_node(r))
        }
    }

    /**
     * Depth of a node below the root: 0 for the root itself.
     */
    pub fn generation(&self, id: usize) -> usize {
        match self.parent(id) {
            Some(p) => self.generation(p) + 1,
            None => 0,
        }
    }

    /**
     * Breadth-first grouping of node indices by depth, sentinels included:
     *
     *   [ [root],
     *     [root.left, root.right],
     *     [root.left.left, root.left.right, root.right.left, ...],
     *     ... ]
     *
     * Sentinels appear in the listing but contribute no further children.
     * An empty tree has no layers. The result is recomputed fresh on every
     * call; no state is cached on the tree.
     */
    pub fn generation_layers(&self) -> Vec<Vec<usize>> {
        let mut layers = Vec::new();

        if self.is_empty(self.root) {
            return layers;
        }
        let mut current = vec![self.root];

        while !current.is_empty() {
            let mut next = Vec::new();
            for &id in &current {
                if !self.is_empty(id) {
                    let (l, r) = self.children(id);
                    next.push(l);
                    next.push(r);
                }
            }
            layers.push(current);
            current = next;
        }
        layers
    }

    /**
     * Size of the most populous generation, 0 for an empty tree.
     */
    pub fn width(&self) -> usize {
        self.generation_layers()
            .iter()
            .map(|layer| layer.len())
            .max()
            .unwrap_or(0)
    }




    // ========================================================================
    /**
     * Panic unless the in-order value sequence is strictly increasing.
     * This function is for testing purposes.
     */
    pub(crate) fn validate_order(&self) {
        if self.in_order().windows(2).any(|w| w[0] >= w[1]) {
            panic!("unordered node")
        }
    }

    /**
     * Panic unless the root and all sentinels are black and every red node
     * has two black children. This function is for testing purposes.
     */
    pub(crate) fn validate_colors(&self) {
        if self.is_red(self.root) {
            panic!("red root")
        }
        self.validate_colors_node(self.root)
    }

    fn validate_colors_node(&self, id: usize) {
        if self.is_empty(id) {
            if self.is_red(id) {
                panic!("red sentinel")
            }
            return;
        }
        let (l, r) = self.children(id);
        if self.is_red(id) && (self.is_red(l) || self.is_red(r)) {
            panic!("red node with a red child")
        }
        self.validate_colors_node(l);
        self.validate_colors_node(r);
    }

    /**
     * Panic unless every path from a node to its descendant sentinels
     * passes through the same number of black nodes. This function is for
     * testing purposes.
     */
    pub(crate) fn validate_black_height(&self) {
        self.uniform_black(self.root);
    }

    fn uniform_black(&self, id: usize) -> usize {
        if self.is_empty(id) {
            return 0;
        }
        let (l, r) = self.children(id);
        let hl = self.uniform_black(l);
        let hr = self.uniform_black(r);
        if hl != hr {
            panic!("unequal black counts between sibling subtrees")
        }
        hl + if self.is_black(id) { 1 } else { 0 }
    }

    /**
     * Panic unless every child's parent back-reference points at the node
     * that owns it. This function is for testing purposes.
     */
    pub(crate) fn validate_links(&self) {
        self.validate_links_node(self.root)
    }

    fn validate_links_node(&self, id: usize) {
        if self.is_empty(id) {
            return;
        }
        let (l, r) = self.children(id);
        if self.parent(l) != Some(id) || self.parent(r) != Some(id) {
            panic!("child with a stale parent back-reference")
        }
        self.validate_links_node(l);
        self.validate_links_node(r);
    }
}
