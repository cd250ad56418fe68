use std::cmp::Ordering;

use crate::tree::Node;

/// An owning edge to a child. `None` marks the empty slot at the bottom of a subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// Walks down from `link` and returns the slot that either holds `key` or is the empty slot
/// where `key` would be inserted.
pub(crate) fn seek<'a, K>(mut link: &'a mut Link<K>, key: &K) -> &'a mut Link<K>
where
    K: Ord,
{
    loop {
        match link.as_deref().map(|node| key.cmp(&node.key)) {
            None | Some(Ordering::Equal) => return link,
            Some(ordering) => {
                if let Some(node) = link {
                    link = match ordering {
                        Ordering::Less => &mut node.left,
                        _ => &mut node.right,
                    };
                }
            }
        }
    }
}

/// Detaches the node with the smallest key in the subtree at `link`. Its right child (it can't
/// have a left one) takes its place.
pub(crate) fn detach_min<K>(mut link: &mut Link<K>) -> Link<K> {
    while link.as_ref().map_or(false, |node| node.left.is_some()) {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }

    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

/// Takes the subtree at `root` apart and returns its keys in order. Nodes are freed as they're
/// visited.
pub(crate) fn drain_in_order<K>(root: Link<K>) -> Vec<K> {
    let mut keys = Vec::new();
    let mut stack: Vec<Box<Node<K>>> = Vec::new();
    let mut current = root;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }

        let Some(node) = stack.pop() else {
            break;
        };
        let Node { key, right, .. } = *node;
        keys.push(key);
        current = right;
    }
    keys
}
