use rebuild_bst::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.delete(k);
                set.remove(k);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.in_order() == set.iter().copied().collect::<Vec<_>>()
        && set.iter().all(|key| tree.contains(key))
        && tree.validate().is_ok()
}

#[quickcheck]
fn build_is_sorted_dedup_and_balanced(xs: Vec<i32>) -> bool {
    let tree = Tree::build(xs.clone());
    let expected: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    tree.in_order() == expected && tree.len() == expected.len() && tree.is_balanced()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x).map(|n| n.key()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn insert_duplicate_is_noop(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before = tree.pre_order();
    for x in &xs {
        tree.insert(*x);
    }

    tree.pre_order() == before
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn delete_missing_is_noop(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != missing).collect();
    let before = tree.level_order();
    tree.delete(&missing);

    tree.level_order() == before
}

#[quickcheck]
fn rebalance_always_balances(ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    let keys = tree.in_order();
    tree.rebalance();

    tree.is_balanced() && tree.in_order() == keys
}

#[quickcheck]
fn rebalance_is_idempotent(xs: Vec<i16>) -> bool {
    let mut tree = Tree::build(xs);
    let shape = tree.level_order();
    tree.rebalance();

    tree.is_balanced() && tree.level_order() == shape
}

#[quickcheck]
fn depth_counts_ancestors(xs: Vec<u8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs.iter().copied());

    // A node's depth is one more than its parent's.
    tree.pre_order_with(|node| {
        let depth = tree.depth(node.key());
        [node.left(), node.right()]
            .into_iter()
            .flatten()
            .all(|child| tree.depth(child.key()) == depth.map(|d| d + 1))
    })
    .into_iter()
    .all(|ok| ok)
}
