use ordered_tree::{Key, NodeRef, OrderedTree};

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a list of keys.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same multiset of keys in both.
fn do_ops(ops: &[Op<i8>], tree: &mut OrderedTree, keys: &mut Vec<Key>) {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                tree.insert(k.into());
                keys.push(k.into());
            }
            Op::Remove(k) => {
                let before = tree.len();
                match keys.iter().position(|&x| x == Key::from(k)) {
                    Some(pos) => {
                        keys.swap_remove(pos);
                        tree.remove(k.into());
                        assert_eq!(tree.len(), before - 1);
                    }
                    None => {
                        let inorder = tree.in_order_traversal();
                        tree.remove(k.into());
                        assert_eq!(tree.len(), before);
                        assert_eq!(tree.in_order_traversal(), inorder);
                    }
                }
            }
            Op::Traverse => {
                let mut sorted = keys.clone();
                sorted.sort_unstable();
                assert_eq!(tree.in_order_traversal(), sorted);
            }
        }
    }
}

/// Checks ordering and parent links through the public node API.
fn is_valid(tree: &OrderedTree) -> bool {
    fn subtree_ok(node: NodeRef<'_>, low: Key, high: Key) -> bool {
        let in_bounds = low <= node.data() && node.data() <= high;
        let left_ok = node.left().map_or(true, |left| {
            left.parent() == Some(node) && subtree_ok(left, low, node.data())
        });
        let right_ok = node.right().map_or(true, |right| {
            right.parent() == Some(node)
                && right.data() > node.data()
                && subtree_ok(right, node.data(), high)
        });

        in_bounds && left_ok && right_ok
    }

    tree.root().map_or(true, |root| {
        root.parent().is_none() && subtree_ok(root, Key::MIN, Key::MAX)
    })
}

fn build(xs: &[i8]) -> OrderedTree {
    xs.iter().map(|&x| Key::from(x)).collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut keys = Vec::new();

    do_ops(&ops, &mut tree, &mut keys);
    keys.sort_unstable();
    is_valid(&tree) && tree.len() == keys.len() && tree.in_order_traversal() == keys
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter()
        .all(|&x| tree.search(x.into()).map(|n| n.data()) == Some(Key::from(x)))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|&x| tree.search(x.into()).is_none() && !tree.contains(x.into()))
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let mut still_present = xs;
    for &remove in &removes {
        // We may have inserted the same value multiple times - remove each one.
        while tree.remove(remove.into()) {}
        still_present.retain(|&x| x != remove);
    }

    is_valid(&tree)
        && removes.iter().all(|&x| tree.search(x.into()).is_none())
        && still_present.iter().all(|&x| tree.search(x.into()).is_some())
}

#[quickcheck]
fn minimum_is_first_in_order(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.find_minimum_value().map(|n| n.data()) == tree.in_order_traversal().first().copied()
}

#[quickcheck]
fn breadth_first_search_agrees_with_search(xs: Vec<i8>, key: i8) -> bool {
    let tree = build(&xs);
    let found = tree
        .breath_first_search(key.into(), tree.len())
        .expect("len() always fits the queue");

    found.map(|n| n.data()) == tree.search(key.into()).map(|n| n.data())
}

#[test]
fn example_traversals() {
    let tree: OrderedTree = [50, 30, 70, 20, 40].iter().copied().collect();

    assert_eq!(tree.in_order_traversal(), vec![20, 30, 40, 50, 70]);
    assert_eq!(tree.breath_first_values(5).unwrap(), vec![50, 30, 70, 20, 40]);
    assert_eq!(tree.depth_first_values(5).unwrap(), vec![50, 30, 20, 40, 70]);
}

#[test]
fn example_successors() {
    let tree: OrderedTree = [20, 10, 30, 5, 15, 25, 35].iter().copied().collect();

    assert_eq!(tree.find_inorder_successor(20).map(|n| n.data()), Some(25));
    assert!(tree.find_inorder_successor(35).is_none());
}
