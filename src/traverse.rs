//! Traversals. Each order comes in two flavours: a plain one that returns clones of the keys and
//! a `_with` one that applies a closure to every node, in order, and collects what it returns.
//!
//! None of these recurse, so a tree that has degenerated into a long chain is walked with heap
//! memory rather than call stack.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let tree = Tree::build([1, 2, 3, 4, 5]);
//!
//! assert_eq!(tree.level_order(), vec![3, 2, 5, 1, 4]);
//! assert_eq!(tree.pre_order(), vec![3, 2, 1, 5, 4]);
//! assert_eq!(tree.in_order(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(tree.post_order(), vec![1, 2, 4, 5, 3]);
//!
//! // Transforms see the whole node.
//! let leaves = tree.in_order_with(|n| n.left().is_none() && n.right().is_none());
//! assert_eq!(leaves, vec![true, false, false, true, false]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::{Node, Tree};

impl<K> Tree<K> {
    /// An iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            nodes: Nodes::new(self.root.as_deref()),
            remaining: self.len,
        }
    }

    /// Keys in breadth-first order, each level left to right.
    pub fn level_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.level_order_with(|node| node.key.clone())
    }

    /// Applies `f` to each node in breadth-first order.
    pub fn level_order_with<R, F>(&self, mut f: F) -> Vec<R>
    where
        F: FnMut(&Node<K>) -> R,
    {
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            out.push(f(node));
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        out
    }

    /// Keys with each node before its left subtree, then its right subtree.
    pub fn pre_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.pre_order_with(|node| node.key.clone())
    }

    /// Applies `f` to each node before its left subtree, then its right subtree.
    pub fn pre_order_with<R, F>(&self, mut f: F) -> Vec<R>
    where
        F: FnMut(&Node<K>) -> R,
    {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(f(node));
            // Right goes on first so the left subtree is finished before it.
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Applies `f` to each node in ascending key order.
    pub fn in_order_with<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&Node<K>) -> R,
    {
        Nodes::new(self.root.as_deref()).map(f).collect()
    }

    /// Keys with each node after both of its subtrees.
    pub fn post_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.post_order_with(|node| node.key.clone())
    }

    /// Applies `f` to each node after both of its subtrees.
    pub fn post_order_with<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&Node<K>) -> R,
    {
        // Node, right, left is exactly post order backwards. Collect the nodes first so `f` still
        // runs in post order.
        let mut reversed = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            reversed.push(node);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        reversed.into_iter().rev().map(f).collect()
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order walk over nodes using an explicit stack of the nodes whose left subtrees are being
/// visited.
struct Nodes<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Nodes<'a, K> {
    fn new(root: Option<&'a Node<K>>) -> Self {
        let mut nodes = Self { stack: Vec::new() };
        nodes.push_left_spine(root);
        nodes
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Nodes<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node)
    }
}

/// An iterator over the keys of a [`Tree`] in ascending order. Created by [`Tree::iter`].
pub struct Iter<'a, K> {
    nodes: Nodes<'a, K>,
    remaining: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
