use serde::{Deserialize, Serialize};




/**
 * The color of a node in a red-black tree. Every node is either red or
 * black; the root and the sentinels are always black.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}




/**
 * A node in a red-black tree. Nodes live in an arena owned by the tree and
 * refer to one another by index, so the parent link is a non-owning
 * back-reference and no ownership cycle exists.
 *
 * An empty node (sentinel) has no value and no children. A value-bearing
 * node always has exactly two children, each either value-bearing or a
 * sentinel, never absent. These conventions are the termination criteria
 * for the recursive procedures on the tree.
 */
#[derive(Clone, Serialize, Deserialize)]
pub struct Node<T: Ord + Copy> {
    pub(crate) value: Option<T>,
    pub(crate) color: Color,
    pub(crate) l: Option<usize>,
    pub(crate) r: Option<usize>,
    pub(crate) p: Option<usize>,
}




// ============================================================================
impl<T: Ord + Copy> Node<T> {

    /**
     * Create an empty (sentinel) node attached to the given parent.
     */
    pub(crate) fn empty(parent: Option<usize>) -> Self {
        Self {
            value: None,
            color: Color::Black,
            l: None,
            r: None,
            p: parent,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}
