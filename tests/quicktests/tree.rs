use bst_container::{Order, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same elements in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(item) => {
                bst.insert(item.clone());
                set.insert(item.clone());
            }
            Op::Remove(item) => {
                bst.remove(item);
                set.remove(item);
            }
        }
    }
}

/// The in-order elements of `tree`, with an empty tree giving an empty list.
fn in_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    tree.in_order()
        .unwrap_or_default()
        .into_iter()
        .cloned()
        .collect()
}

/// The pre-order elements of `tree`. Unlike the in-order elements these also pin down its shape.
fn pre_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    tree.traverse(Order::Pre)
        .unwrap_or_default()
        .into_iter()
        .cloned()
        .collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    in_order(&tree) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.find(x))
}

#[quickcheck]
fn in_order_is_strictly_increasing(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    in_order(&tree).windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before = pre_order(&tree);

    !tree.insert(xs[pick % xs.len()]) && pre_order(&tree) == before
}

#[quickcheck]
fn remove_absent_changes_nothing(xs: Vec<i8>, absent: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != absent).collect();
    let before = in_order(&tree);

    !tree.remove(&absent) && in_order(&tree) == before
}

#[quickcheck]
fn remove_present_deletes_exactly_it(xs: Vec<i8>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let target = xs[pick % xs.len()];
    let mut expected = in_order(&tree);
    expected.retain(|x| *x != target);

    tree.remove(&target) && !tree.find(&target) && in_order(&tree) == expected
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for remove in &removes {
        tree.remove(remove);
    }

    let still_present: Vec<_> = xs.iter().filter(|x| !removes.contains(x)).collect();

    removes.iter().all(|x| !tree.find(x)) && still_present.iter().all(|x| tree.find(x))
}

#[quickcheck]
fn sorted_inserts_build_a_chain(n: u8) -> bool {
    let tree: Tree<_> = (0..n).collect();

    tree.height() == n as usize
}

#[quickcheck]
fn clone_is_independent(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let original: Tree<_> = xs.iter().copied().collect();
    let snapshot = in_order(&original);

    let mut copy = original.clone();
    let mut set: BTreeSet<_> = xs.into_iter().collect();
    do_ops(&ops, &mut copy, &mut set);

    in_order(&original) == snapshot && in_order(&copy) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn clone_from_is_independent(xs: Vec<i8>, ys: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let mut original: Tree<_> = xs.iter().copied().collect();
    let mut copy: Tree<_> = ys.into_iter().collect();
    copy.clone_from(&original);
    let snapshot = in_order(&copy);

    let mut set: BTreeSet<_> = xs.into_iter().collect();
    do_ops(&ops, &mut original, &mut set);

    in_order(&copy) == snapshot && in_order(&original) == set.into_iter().collect::<Vec<_>>()
}
