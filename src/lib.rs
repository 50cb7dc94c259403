//! Arbor maintains an ordered set of comparable values in a red-black
//! tree: a self-balancing binary search tree whose coloring invariants
//! bound the height to twice the logarithm of the node count. Nodes live
//! in an arena owned by the tree and refer to one another by index, which
//! keeps the parent back-references non-owning. Insertion comes in two
//! flavors: plain binary-search-tree placement, and balanced placement
//! followed by the classical recolor-and-rotate fixup, with rotations that
//! preserve the identity of the pivot index across restructuring. The
//! structural queries (height, black-height, breadth-first generation
//! layers, width) are read-only and intended for hosts such as
//! visualizations that consume the node graph but never influence the
//! tree logic. Deletion is not implemented; the tree only grows.

mod fixup;
pub mod node;
mod query;
mod rotate;
pub mod tree;

#[cfg(test)]
mod proptests;
