//! The tree itself. A [`Tree`] is built in one shot from any sequence of keys and comes out with
//! minimal height. After that, [`insert`][Tree::insert] and [`delete`][Tree::delete] are plain
//! BST operations that never restore balance on their own; call [`rebalance`][Tree::rebalance]
//! for that.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let mut tree = Tree::build([7, 3, 9, 3, 1]);
//! assert_eq!(tree.in_order(), vec![1, 3, 7, 9]);
//! assert!(tree.is_balanced());
//!
//! // Growing one side only leaves the tree lopsided...
//! tree.insert(120);
//! tree.insert(110);
//! tree.insert(130);
//! assert!(!tree.is_balanced());
//!
//! // ...until it is rebuilt.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.in_order(), vec![1, 3, 7, 9, 110, 120, 130]);
//! ```

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use log::{debug, trace};

use crate::error::InvariantError;
use crate::util::{self, Link};

/// A Binary Search Tree over distinct keys. Keys can be inserted, found, and deleted, and the
/// whole tree can be rebuilt into a minimal-height shape on demand.
pub struct Tree<K> {
    pub(crate) root: Link<K>,
    /// Number of nodes in the tree.
    pub(crate) len: usize,
}

/// A `Node` holds a key and up to two children. Everything in the left subtree is smaller than
/// the key and everything in the right subtree is larger.
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Freeing children through the default recursive drop would use one stack frame per
        // level, and nothing stops a tree from being a long chain.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a minimal-height tree holding every distinct key in `values`. Duplicates are
    /// dropped and the input doesn't need to be sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::build([7, 3, 9, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 4);
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(7));
    /// assert_eq!(tree.level_order(), vec![7, 3, 9, 1]);
    /// ```
    pub fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let keys: BTreeSet<K> = values.into_iter().collect();
        let len = keys.len();
        debug!("building tree from {} distinct keys", len);

        Self {
            root: Self::build_sorted(len, &mut keys.into_iter()),
            len,
        }
    }

    /// Builds a subtree from the next `count` keys of an ascending iterator. The key in the
    /// middle (index `count / 2`) becomes the root, so the two halves differ in size by at most
    /// one. Keys are consumed in order: left half, root, right half.
    fn build_sorted<I>(count: usize, keys: &mut I) -> Link<K>
    where
        I: Iterator<Item = K>,
    {
        if count == 0 {
            return None;
        }

        let mid = count / 2;
        let left = Self::build_sorted(mid, keys);
        let key = keys.next()?;
        let right = Self::build_sorted(count - mid - 1, keys);

        Some(Box::new(Node { key, left, right }))
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key` as a new leaf. Inserting a key that is already present does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.in_order(), vec![1, 2]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let slot = util::seek(&mut self.root, &key);
        if slot.is_some() {
            trace!("insert: key already present");
            return;
        }

        *slot = Some(Box::new(Node::new(key)));
        self.len += 1;
    }

    /// Deletes the node holding `key`. If the tree does not contain the key, nothing happens.
    ///
    /// A node with two children takes the key of its in-order successor, and the successor's
    /// node is removed from the right subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::build([1, 2, 3]);
    /// tree.delete(&2);
    /// tree.delete(&42);
    ///
    /// assert!(tree.find(&2).is_none());
    /// assert_eq!(tree.in_order(), vec![1, 3]);
    /// ```
    pub fn delete(&mut self, key: &K)
    where
        K: Ord,
    {
        let slot = util::seek(&mut self.root, key);
        let Some(mut node) = slot.take() else {
            trace!("delete: key not present");
            return;
        };

        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                node.left = Some(left);
                node.right = Some(right);
                if let Some(successor) = util::detach_min(&mut node.right) {
                    let Node { key, .. } = *successor;
                    node.key = key;
                }
                Some(node)
            }
        };
        self.len -= 1;
    }

    /// Finds the node holding `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.key()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Number of edges between the root and the node holding `key`. The root has depth 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::build([7, 3, 9, 1]);
    ///
    /// assert_eq!(tree.depth(&7), Some(0));
    /// assert_eq!(tree.depth(&1), Some(2));
    /// assert_eq!(tree.depth(&42), None);
    /// ```
    pub fn depth(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        let mut depth = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(depth),
                Ordering::Greater => node.right.as_deref(),
            };
            depth += 1;
        }
        None
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Rebuilds the tree into a minimal-height shape. Every node is replaced; the keys are
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in 0..10 {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.height(), 9);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 3);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn rebalance(&mut self) {
        debug!("rebalancing {} keys from height {}", self.len, self.height());

        let keys = util::drain_in_order(self.root.take());
        let len = keys.len();
        self.root = Self::build_sorted(len, &mut keys.into_iter());
        self.len = len;

        if cfg!(debug_assertions) {
            assert!(self.is_balanced());
        }
        debug!("rebalanced to height {}", self.height());
    }

    /// Checks that keys are strictly ascending in order and that the tree's length matches its
    /// node count.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree = Tree::build(vec![5, 1, 4]);
    /// assert!(tree.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), InvariantError>
    where
        K: Ord,
    {
        let mut counted = 0;
        let mut previous = None;
        for key in self.iter() {
            if previous.map_or(false, |previous| previous >= key) {
                return Err(InvariantError::OutOfOrder { position: counted });
            }
            previous = Some(key);
            counted += 1;
        }

        if counted != self.len {
            return Err(InvariantError::LengthMismatch {
                recorded: self.len,
                counted,
            });
        }
        Ok(())
    }
}
