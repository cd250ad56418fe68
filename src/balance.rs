//! Height and balance queries.
//!
//! Heights count edges: an absent subtree has height `-1` and a lone leaf has height `0`. A tree
//! is balanced when, at every node, the heights of the two subtrees differ by at most one.

use crate::tree::{Node, Tree};

/// Height of the subtree rooted at `node`, or `-1` when there is no node.
///
/// # Examples
///
/// ```
/// use rebuild_bst::{height, Tree};
///
/// let tree = Tree::build([1, 2, 3]);
///
/// assert_eq!(height(tree.root()), 1);
/// assert_eq!(height(tree.find(&3)), 0);
/// assert_eq!(height(tree.find(&42)), -1);
/// ```
pub fn height<K>(node: Option<&Node<K>>) -> isize {
    measure(node).height
}

impl<K> Node<K> {
    /// Height of the subtree rooted at this node. A leaf has height 0.
    pub fn height(&self) -> isize {
        height(Some(self))
    }
}

impl<K> Tree<K> {
    /// Height of the whole tree; `-1` when it's empty.
    pub fn height(&self) -> isize {
        height(self.root.as_deref())
    }

    /// Whether every node's subtrees differ in height by at most one. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::build([2, 1, 3]);
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(4);
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(5);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        measure(self.root.as_deref()).balanced
    }
}

/// What one bottom-up pass learns about a subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Measure {
    height: isize,
    balanced: bool,
}

impl Measure {
    const EMPTY: Self = Self {
        height: -1,
        balanced: true,
    };

    fn join(left: Self, right: Self) -> Self {
        Self {
            height: left.height.max(right.height) + 1,
            balanced: left.balanced
                && right.balanced
                && (left.height - right.height).abs() <= 1,
        }
    }
}

/// Post-order walk that measures every subtree once. Children's results are kept on their own
/// stack until their parent joins them.
fn measure<K>(root: Option<&Node<K>>) -> Measure {
    enum Step<'a, K> {
        Visit(Option<&'a Node<K>>),
        Join,
    }

    let mut steps = vec![Step::Visit(root)];
    let mut measured: Vec<Measure> = Vec::new();
    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(None) => measured.push(Measure::EMPTY),
            Step::Visit(Some(node)) => {
                steps.push(Step::Join);
                steps.push(Step::Visit(node.right.as_deref()));
                steps.push(Step::Visit(node.left.as_deref()));
            }
            Step::Join => {
                let (Some(right), Some(left)) = (measured.pop(), measured.pop()) else {
                    unreachable!("both children are measured before their parent");
                };
                measured.push(Measure::join(left, right));
            }
        }
    }

    measured.pop().unwrap_or(Measure::EMPTY)
}
