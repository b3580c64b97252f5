use ordered_tree::OrderedTree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same elements in both.
fn do_ops<E>(ops: &[Op<E>], bst: &mut OrderedTree<E>, set: &mut BTreeSet<E>)
where
    E: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(e) => {
                bst.insert(e.clone());
                set.insert(e.clone());
            }
            Op::Delete(e) => {
                bst.delete(e);
                set.remove(e);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.inorder().eq(set.iter()) && tree.len() == set.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn second_insert_is_a_no_op(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: OrderedTree<_> = xs.into_iter().collect();
    tree.insert(x);
    let before: Vec<_> = tree.inorder().copied().collect();

    !tree.insert(x) && tree.inorder().copied().eq(before)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        let len = tree.len();
        let was_present = tree.search(delete);

        if tree.delete(delete) != was_present {
            return false;
        }
        let expected_len = if was_present { len - 1 } else { len };
        if tree.len() != expected_len || tree.search(delete) {
            return false;
        }
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.search(x)) && still_present.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn size_matches_inorder(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree: OrderedTree<_> = xs.into_iter().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    tree.inorder().count() == tree.len()
}
