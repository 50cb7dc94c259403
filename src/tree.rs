use std::cmp::Ordering::{Equal, Greater, Less};
use std::iter::FromIterator;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::node::{Color, Node};




/**
 * A red-black tree holding an ordered set of values. Nodes are stored in
 * an arena and linked by index; the root slot (index 0) always exists,
 * possibly empty. There is no removal operation, so the arena only grows:
 * a rotation retires at most one slot per call and retired slots are never
 * reused.
 *
 * After every completed `insert_balanced` the tree satisfies the red-black
 * invariants: the root and all sentinels are black, a red node has two
 * black children, and every path from a node to its descendant sentinels
 * passes through the same number of black nodes.
 */
#[derive(Clone, Serialize, Deserialize)]
pub struct Tree<T: Ord + Copy> {
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) root: usize,
}




// ============================================================================
impl<T: Ord + Copy> Tree<T> {

    pub fn new() -> Self {
        Self {
            nodes: vec![Node::empty(None)],
            root: 0,
        }
    }

    /**
     * Index of the root slot. The index stays valid across insertions and
     * rotations; the slot is empty until the first insertion.
     */
    pub fn root(&self) -> usize {
        self.root
    }

    pub fn value(&self, id: usize) -> Option<T> {
        self.nodes[id].value
    }

    pub fn color(&self, id: usize) -> Color {
        self.nodes[id].color
    }

    pub fn left(&self, id: usize) -> Option<usize> {
        self.nodes[id].l
    }

    pub fn right(&self, id: usize) -> Option<usize> {
        self.nodes[id].r
    }

    pub fn parent(&self, id: usize) -> Option<usize> {
        self.nodes[id].p
    }




    // ========================================================================
    pub fn is_empty(&self, id: usize) -> bool {
        self.nodes[id].is_empty()
    }

    pub fn is_black(&self, id: usize) -> bool {
        self.nodes[id].is_black()
    }

    pub fn is_red(&self, id: usize) -> bool {
        self.nodes[id].is_red()
    }

    /**
     * True when the node has no parent. Besides the real root this also
     * holds for slots retired by a rotation, which read as inert,
     * parentless sentinels afterwards; a host holding an index across a
     * rotation may keep only the pivot's (see the rotation contract).
     */
    pub fn is_root(&self, id: usize) -> bool {
        self.nodes[id].p.is_none()
    }

    /**
     * A leaf is a value-bearing node whose two children are sentinels.
     */
    pub fn is_leaf(&self, id: usize) -> bool {
        match (self.nodes[id].l, self.nodes[id].r) {
            (Some(l), Some(r)) => self.is_empty(l) && self.is_empty(r),
            _ => false,
        }
    }

    pub fn is_left_child(&self, id: usize) -> bool {
        self.parent(id).map_or(false, |p| self.nodes[p].l == Some(id))
    }

    pub fn is_right_child(&self, id: usize) -> bool {
        self.parent(id).map_or(false, |p| self.nodes[p].r == Some(id))
    }

    /**
     * The other child of this node's parent, or `None` at the root.
     */
    pub fn sibling(&self, id: usize) -> Option<usize> {
        let p = self.parent(id)?;
        if self.nodes[p].l == Some(id) {
            self.nodes[p].r
        } else {
            self.nodes[p].l
        }
    }

    /**
     * The parent's sibling. Defined only when the parent exists and is not
     * the root; asking for the uncle of a root's child is a logic error in
     * the fixup and is caught there by a debug assertion.
     */
    pub fn uncle(&self, id: usize) -> Option<usize> {
        self.sibling(self.parent(id)?)
    }




    // ========================================================================
    /**
     * Insert a value respecting binary-search-tree order, without any
     * rebalancing. Returns false if the value was already present (the
     * tree is a set; duplicates are reported and ignored).
     */
    pub fn insert_plain(&mut self, value: T) -> bool {
        self.place(self.root, value).is_some()
    }

    /**
     * Insert a value respecting binary-search-tree order, then restore the
     * red-black invariants starting at the new node. Returns false if the
     * value was already present.
     */
    pub fn insert_balanced(&mut self, value: T) -> bool {
        match self.place(self.root, value) {
            Some(id) => {
                self.fixup(id);
                true
            }
            None => false,
        }
    }

    /**
     * Descend from `id` comparing against each value-bearing node, and
     * materialize the value into the empty slot the descent reaches. The
     * slot keeps its index, gains two fresh sentinel children, and is
     * colored red unless it is the root.
     */
    fn place(&mut self, id: usize, value: T) -> Option<usize> {
        if let Some(v) = self.nodes[id].value {
            let (l, r) = self.children(id);
            match value.cmp(&v) {
                Less => self.place(l, value),
                Greater => self.place(r, value),
                Equal => {
                    debug!("value already present in the tree");
                    None
                }
            }
        } else {
            let l = self.push_empty(id);
            let r = self.push_empty(id);
            let node = &mut self.nodes[id];
            node.value = Some(value);
            node.l = Some(l);
            node.r = Some(r);
            node.color = if node.p.is_some() {
                Color::Red
            } else {
                Color::Black
            };
            Some(id)
        }
    }

    fn push_empty(&mut self, parent: usize) -> usize {
        self.nodes.push(Node::empty(Some(parent)));
        self.nodes.len() - 1
    }

    /**
     * Child indices of a value-bearing node. Asking a sentinel for its
     * children is a logic error and fails fast.
     */
    pub(crate) fn children(&self, id: usize) -> (usize, usize) {
        match (self.nodes[id].l, self.nodes[id].r) {
            (Some(l), Some(r)) => (l, r),
            _ => panic!("sentinel nodes have no children"),
        }
    }




    // ========================================================================
    /**
     * Return the number of value-bearing nodes in the tree.
     */
    pub fn len(&self) -> usize {
        self.len_node(self.root)
    }

    fn len_node(&self, id: usize) -> usize {
        if self.is_empty(id) {
            0
        } else {
            let (l, r) = self.children(id);
            self.len_node(l) + self.len_node(r) + 1
        }
    }

    pub fn contains(&self, value: T) -> bool {
        self.contains_node(self.root, value)
    }

    fn contains_node(&self, id: usize, value: T) -> bool {
        if let Some(v) = self.nodes[id].value {
            let (l, r) = self.children(id);
            match value.cmp(&v) {
                Less => self.contains_node(l, value),
                Greater => self.contains_node(r, value),
                Equal => true,
            }
        } else {
            false
        }
    }

    /**
     * In-order sequence of the values, which is their sorted order.
     */
    pub fn in_order(&self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        self.in_order_node(self.root, &mut values);
        values
    }

    fn in_order_node(&self, id: usize, values: &mut Vec<T>) {
        if let Some(v) = self.nodes[id].value {
            let (l, r) = self.children(id);
            self.in_order_node(l, values);
            values.push(v);
            self.in_order_node(r, values);
        }
    }
}




// ============================================================================
impl<T: Ord + Copy> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}




// ============================================================================
impl<T: Ord + Copy> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert_balanced(value);
        }
        tree
    }
}
