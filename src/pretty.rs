//! Renders a tree sideways as text: the right subtree above a node, the left subtree below it.
//!
//! ```
//! use rebuild_bst::Tree;
//!
//! let tree = Tree::build([7, 3, 9, 1]);
//! let expected = "\
//! │   ┌── 9
//! └── 7
//!     └── 3
//!         └── 1
//! ";
//! assert_eq!(tree.pretty(), expected);
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

const RIGHT_CONNECTOR: &str = "┌── ";
const LEFT_CONNECTOR: &str = "└── ";
const BRANCH: &str = "│   ";
const GAP: &str = "    ";

impl<K> Tree<K>
where
    K: fmt::Display,
{
    /// The tree drawn as one line per node. An empty tree gives an empty string.
    pub fn pretty(&self) -> String {
        self.to_string()
    }
}

/// A node still to be drawn, along with the indentation inherited from its ancestors.
enum Step<'a, K> {
    /// Queue the node's right subtree, the node itself, and its left subtree.
    Visit(&'a Node<K>, String, bool),
    /// Write the node's own line.
    Emit(&'a Node<K>, String, bool),
}

impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut steps: Vec<Step<'_, K>> = self
            .root
            .as_deref()
            .map(|root| Step::Visit(root, String::new(), true))
            .into_iter()
            .collect();

        while let Some(step) = steps.pop() {
            match step {
                Step::Emit(node, prefix, is_left) => {
                    let connector = if is_left { LEFT_CONNECTOR } else { RIGHT_CONNECTOR };
                    writeln!(f, "{}{}{}", prefix, connector, node.key)?;
                }
                Step::Visit(node, prefix, is_left) => {
                    // Pushed bottom line first: left subtree, this node, right subtree.
                    if let Some(left) = node.left.as_deref() {
                        let indent = if is_left { GAP } else { BRANCH };
                        steps.push(Step::Visit(left, format!("{}{}", prefix, indent), true));
                    }
                    if let Some(right) = node.right.as_deref() {
                        let indent = if is_left { BRANCH } else { GAP };
                        let right_prefix = format!("{}{}", prefix, indent);
                        steps.push(Step::Emit(node, prefix, is_left));
                        steps.push(Step::Visit(right, right_prefix, false));
                    } else {
                        steps.push(Step::Emit(node, prefix, is_left));
                    }
                }
            }
        }
        Ok(())
    }
}
