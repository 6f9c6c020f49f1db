//! Ordered dictionaries implemented with binary search trees.
//!
//! The crate provides two map types with the same entry semantics: `AvlMap`,
//! a self-balancing binary search tree with logarithmic search, insertion,
//! and deletion, and `BstMap`, an unbalanced reference implementation whose
//! depth degrades with adversarial insertion orders.

mod entry;
pub mod avl;
pub mod bst;
