//! This crate exposes a Binary Search Tree (BST) that is balanced when it's
//! built and can be rebuilt into a balanced shape on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is the longest path
//! from the root `Node` to a leaf `Node`). With clever construction the height
//! of a BST can be limited to `O(lg N)` where `N` is the number of nodes in the
//! tree. BSTs also naturally support sorted iteration by visiting the left
//! subtree, then the subtree root, then the right subtree.
//!
//! ## Rebuilding instead of rotating
//!
//! [`Tree`] doesn't rotate nodes after every change the way an AVL or
//! Red-Black tree does. [`Tree::build`] sorts its input and always picks the
//! middle key as the root, so a fresh tree has minimal height. Inserts and
//! deletes after that can make it arbitrarily lopsided;
//! [`Tree::is_balanced`] reports when that has happened and
//! [`Tree::rebalance`] rebuilds the whole thing from its sorted keys.
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let mut tree = Tree::new();
//! for key in 1..=5 {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.height(), 4);
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.in_order(), vec![1, 2, 3, 4, 5]);
//! ```
//!
//! ## Logging
//!
//! Builds and rebalances are reported through the [`log`] facade at `debug`
//! level, and ignored inserts/deletes at `trace` level. Install any logger
//! to see them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod balance;
mod error;
mod pretty;
mod traverse;
mod tree;
mod util;

#[cfg(test)]
mod test;

pub use balance::height;
pub use error::InvariantError;
pub use traverse::Iter;
pub use tree::{Node, Tree};
