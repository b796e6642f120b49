//! An unbalanced BST over integer keys whose nodes know their parents.
//!
//! Nodes live in an arena owned by the [`OrderedTree`]. Children and parents refer to each other
//! by [`NodeId`], so the parent link never owns anything and there are no reference cycles.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(1).is_none());
//!
//! for key in [50, 30, 70, 20, 40] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.in_order_traversal(), vec![20, 30, 40, 50, 70]);
//! assert_eq!(tree.breath_first_values(8).unwrap(), vec![50, 30, 70, 20, 40]);
//! assert_eq!(tree.find_inorder_successor(40).map(|n| n.data()), Some(50));
//!
//! // Removing a node with two children keeps everything else in order.
//! tree.remove(30);
//! assert_eq!(tree.in_order_traversal(), vec![20, 40, 50, 70]);
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::ops::ControlFlow;

use log::{debug, trace};

use crate::error::Result;
use crate::queue::BoundedQueue;
use crate::stack::BoundedStack;
use crate::util::Side;
use crate::Capacity;

/// The key type stored in an [`OrderedTree`].
pub type Key = i64;

/// A handle to a node inside an [`OrderedTree`].
///
/// Ids are only meaningful for the tree that handed them out. Once a node is removed its slot may
/// be reused by a later insert, so an old id can end up naming a different node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct Node {
    data: Key,
    left: Option<NodeId>,
    right: Option<NodeId>,
    // Navigation only. The parent owns us through its `left` or `right`.
    parent: Option<NodeId>,
}

/// A Binary Search Tree that can be used for inserting, searching, and removing integer keys.
/// Keys equal to a node's key are placed in its left subtree.
#[derive(Clone, Default)]
pub struct OrderedTree {
    nodes: Vec<Option<Node>>,
    free: Vec<usize>,
    root: Option<NodeId>,
    len: usize,
}

impl fmt::Debug for OrderedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl FromIterator<Key> for OrderedTree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Key> for OrderedTree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a> IntoIterator for &'a OrderedTree {
    type Item = Key;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl OrderedTree {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. This is the largest
    /// stack [`depth_first_values`](Self::depth_first_values) can need, give or take the
    /// siblings pushed along the way; `len()` always suffices for either traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree = [2, 1, 3].iter().copied().collect();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(OrderedTree::new().height(), 0);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(NodeId, usize)> =
            self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = pending.pop() {
            height = height.max(depth);
            let node = self.node(id);
            pending.extend(node.left.map(|left| (left, depth + 1)));
            pending.extend(node.right.map(|right| (right, depth + 1)));
        }
        height
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.root.map(|id| self.node_ref(id))
    }

    /// Looks up a node by id. Returns `None` if the id's slot is empty.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        match self.nodes.get(id.0) {
            Some(Some(_)) => Some(self.node_ref(id)),
            _ => None,
        }
    }

    /// Inserts `key` as a new leaf and returns it. If the tree is empty the new node becomes the
    /// root. Inserting a key that is already present adds another node to its left subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// let root = tree.insert(5).id();
    ///
    /// let child = tree.insert(5);
    /// assert_eq!(child.parent().map(|p| p.id()), Some(root));
    /// assert!(child.is_left_child());
    /// ```
    pub fn insert(&mut self, key: Key) -> NodeRef<'_> {
        let id = match self.root {
            None => {
                let id = self.allocate(key, None);
                self.root = Some(id);
                id
            }
            Some(mut current) => loop {
                let side = Side::descend(key, self.node(current).data);
                match self.child(current, side) {
                    Some(child) => current = child,
                    None => {
                        let id = self.allocate(key, Some(current));
                        self.set_child(current, side, Some(id));
                        break id;
                    }
                }
            },
        };
        self.len += 1;

        self.node_ref(id)
    }

    /// Potentially finds a node holding `key`. When the key was inserted more than once this is
    /// the one closest to the root. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(1).map(|n| n.data()), Some(1));
    /// assert!(tree.search(42).is_none());
    /// ```
    pub fn search(&self, key: Key) -> Option<NodeRef<'_>> {
        self.find_id(key).map(|id| self.node_ref(id))
    }

    /// Whether some node holds `key`.
    pub fn contains(&self, key: Key) -> bool {
        self.find_id(key).is_some()
    }

    /// Removes one node holding `key` and returns whether anything was removed. Removing a key
    /// that isn't present leaves the tree untouched.
    ///
    /// A node with two children takes the key of its inorder successor, and the successor node is
    /// unlinked instead. Structural removal therefore only ever happens at a node with at most one
    /// child. When the successor's key is duplicated in the right subtree the inorder predecessor
    /// is used instead, since moving one copy up would leave the other to the right of an equal
    /// key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree = [5, 3, 8].iter().copied().collect();
    ///
    /// assert!(tree.remove(5));
    /// assert_eq!(tree.root().map(|n| n.data()), Some(8));
    /// assert!(!tree.remove(5));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, key: Key) -> bool {
        let Some(id) = self.find_id(key) else {
            return false;
        };

        let node = self.node(id);
        match (node.left, node.right) {
            (Some(left), Some(right)) => {
                let successor = self.leftmost(right);
                // A copy of the successor's key above it would end up right of an equal key, so
                // the predecessor moves up instead. It is rightmost, so it has no right child.
                let (pulled, replacement) = if self.has_equal_parent(successor, id) {
                    let predecessor = self.rightmost(left);
                    (predecessor, self.node(predecessor).left)
                } else {
                    // Leftmost, so it can only have a right child.
                    (successor, self.node(successor).right)
                };
                let pulled_key = self.node(pulled).data;
                trace!("removing {} by pulling up {}", key, pulled_key);
                self.node_mut(id).data = pulled_key;
                self.splice(pulled, replacement);
            }
            (Some(left), None) => {
                trace!("removing {} with only a left child", key);
                self.splice(id, Some(left));
            }
            (None, Some(right)) => {
                trace!("removing {} with only a right child", key);
                self.splice(id, Some(right));
            }
            (None, None) => {
                trace!("removing leaf {}", key);
                self.splice(id, None);
            }
        }
        self.len -= 1;

        true
    }

    /// The node with the smallest key, or `None` if the tree is empty.
    pub fn find_minimum_value(&self) -> Option<NodeRef<'_>> {
        self.root.map(|root| self.node_ref(self.leftmost(root)))
    }

    /// The node with the largest key, or `None` if the tree is empty.
    pub fn find_maximum_value(&self) -> Option<NodeRef<'_>> {
        self.root.map(|root| self.node_ref(self.rightmost(root)))
    }

    /// The node with the smallest key strictly greater than `key`, starting from the node
    /// [`search`](Self::search) finds for `key`. Returns `None` if `key` isn't in the tree or if
    /// it is the largest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree = [20, 10, 30, 5, 15, 25, 35].iter().copied().collect();
    ///
    /// assert_eq!(tree.find_inorder_successor(20).map(|n| n.data()), Some(25));
    /// assert_eq!(tree.find_inorder_successor(15).map(|n| n.data()), Some(20));
    /// assert!(tree.find_inorder_successor(35).is_none());
    /// assert!(tree.find_inorder_successor(42).is_none());
    /// ```
    pub fn find_inorder_successor(&self, key: Key) -> Option<NodeRef<'_>> {
        let node = self.search(key)?;
        if let Some(right) = node.right() {
            return Some(self.node_ref(self.leftmost(right.id)));
        }

        // Climb while we're a right child. The first ancestor we reach from its left is next.
        let mut current = node;
        while let Some(parent) = current.parent() {
            if current.is_left_child() {
                return Some(parent);
            }
            current = parent;
        }

        None
    }

    /// The keys in ascending order.
    pub fn in_order_traversal(&self) -> Vec<Key> {
        self.iter().collect()
    }

    /// An iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            tree: self,
            pending: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// The keys in pre-order (node, left subtree, right subtree), collected with a
    /// [`BoundedStack`] of the given capacity.
    ///
    /// Fails if the stack overflows. An empty tree succeeds with any capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Capacity, OrderedTree};
    ///
    /// let tree: OrderedTree = [50, 30, 70, 20, 40].iter().copied().collect();
    ///
    /// assert_eq!(tree.depth_first_values(3).unwrap(), vec![50, 30, 20, 40, 70]);
    /// assert!(tree.depth_first_values(1).is_err());
    /// assert!(tree.depth_first_values(Capacity::Unbounded).is_ok());
    /// ```
    pub fn depth_first_values(&self, capacity: impl Into<Capacity>) -> Result<Vec<Key>> {
        let result = self.pre_order(capacity.into());
        if let Err(err) = &result {
            debug!("depth first traversal of {} nodes failed: {}", self.len, err);
        }
        result
    }

    /// The keys level by level, left to right, collected with a [`BoundedQueue`] of the given
    /// capacity.
    ///
    /// Fails if the queue overflows. An empty tree succeeds with any capacity.
    pub fn breath_first_values(&self, capacity: impl Into<Capacity>) -> Result<Vec<Key>> {
        let mut values = Vec::with_capacity(self.len);
        let result = self.level_order(capacity.into(), |node| {
            values.push(node.data());
            ControlFlow::Continue(())
        });
        if let Err(err) = &result {
            debug!("breadth first traversal of {} nodes failed: {}", self.len, err);
        }
        result.map(|_| values)
    }

    /// Walks the tree like [`breath_first_values`](Self::breath_first_values) and returns the
    /// first node holding `key`, or `None` once every node has been visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree = [50, 30, 70].iter().copied().collect();
    ///
    /// assert_eq!(tree.breath_first_search(70, 2).unwrap().map(|n| n.data()), Some(70));
    /// assert!(tree.breath_first_search(60, 2).unwrap().is_none());
    /// assert!(tree.breath_first_search(70, 1).is_err());
    /// ```
    pub fn breath_first_search(
        &self,
        key: Key,
        capacity: impl Into<Capacity>,
    ) -> Result<Option<NodeRef<'_>>> {
        let result = self.level_order(capacity.into(), |node| {
            if node.data() == key {
                ControlFlow::Break(node.id)
            } else {
                ControlFlow::Continue(())
            }
        });
        if let Err(err) = &result {
            debug!("breadth first search for {} failed: {}", key, err);
        }
        result.map(|found| found.map(|id| self.node_ref(id)))
    }

    fn pre_order(&self, capacity: Capacity) -> Result<Vec<Key>> {
        let Some(root) = self.root else {
            return Ok(Vec::new());
        };

        let mut values = Vec::with_capacity(self.len);
        let mut stack = BoundedStack::new(capacity);
        stack.push(root)?;
        while !stack.is_empty() {
            let node = self.node(stack.pop()?);
            values.push(node.data);

            // Right goes in first so the left subtree comes out first.
            if let Some(right) = node.right {
                stack.push(right)?;
            }
            if let Some(left) = node.left {
                stack.push(left)?;
            }
        }

        Ok(values)
    }

    /// Visits nodes level by level until `visit` breaks, returning the id it broke with.
    fn level_order<F>(&self, capacity: Capacity, mut visit: F) -> Result<Option<NodeId>>
    where
        F: FnMut(NodeRef<'_>) -> ControlFlow<NodeId>,
    {
        let Some(root) = self.root else {
            return Ok(None);
        };

        let mut queue = BoundedQueue::new(capacity);
        queue.enqueue(root)?;
        while !queue.is_empty() {
            let id = queue.dequeue()?;
            if let ControlFlow::Break(found) = visit(self.node_ref(id)) {
                return Ok(Some(found));
            }

            let node = self.node(id);
            if let Some(left) = node.left {
                queue.enqueue(left)?;
            }
            if let Some(right) = node.right {
                queue.enqueue(right)?;
            }
        }

        Ok(None)
    }

    fn find_id(&self, key: Key) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            if node.data == key {
                return Some(id);
            }
            current = self.child(id, Side::descend(key, node.data));
        }
        None
    }

    /// The leftmost node of the subtree rooted at `id`.
    fn leftmost(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(left) = self.node(current).left {
            current = left;
        }
        current
    }

    /// The rightmost node of the subtree rooted at `id`.
    fn rightmost(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(right) = self.node(current).right {
            current = right;
        }
        current
    }

    /// Whether `id`'s parent, other than `except`, holds the same key as `id`.
    fn has_equal_parent(&self, id: NodeId, except: NodeId) -> bool {
        let node = self.node(id);
        node.parent
            .filter(|&parent| parent != except)
            .map_or(false, |parent| self.node(parent).data == node.data)
    }

    /// Unlinks `id`, which has at most one child, putting `replacement` (that child) in its place.
    fn splice(&mut self, id: NodeId, replacement: Option<NodeId>) {
        let removed = self.release(id);
        debug_assert!(removed.left.is_none() || removed.right.is_none());

        if let Some(replacement) = replacement {
            self.node_mut(replacement).parent = removed.parent;
        }
        match removed.parent {
            None => self.root = replacement,
            Some(parent) => {
                let side = if self.node(parent).left == Some(id) {
                    Side::Left
                } else {
                    Side::Right
                };
                self.set_child(parent, side, replacement);
            }
        }
    }

    fn allocate(&mut self, data: Key, parent: Option<NodeId>) -> NodeId {
        let node = Node {
            data,
            left: None,
            right: None,
            parent,
        };
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node {
        let node = self.nodes[id.0]
            .take()
            .expect("released ids point at occupied slots");
        self.free.push(id.0);
        node
    }

    fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        let node = self.node(id);
        match side {
            Side::Left => node.left,
            Side::Right => node.right,
        }
    }

    fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        let node = self.node_mut(id);
        match side {
            Side::Left => node.left = child,
            Side::Right => node.right = child,
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.0]
            .as_ref()
            .expect("linked ids point at occupied slots")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.0]
            .as_mut()
            .expect("linked ids point at occupied slots")
    }

    fn node_ref(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { tree: self, id }
    }
}

/// A borrowed view of one node in an [`OrderedTree`].
#[derive(Copy, Clone)]
pub struct NodeRef<'a> {
    tree: &'a OrderedTree,
    id: NodeId,
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<'a> NodeRef<'a> {
    /// This node's id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The key stored in this node.
    pub fn data(&self) -> Key {
        self.node().data
    }

    /// The left child.
    pub fn left(&self) -> Option<NodeRef<'a>> {
        self.node().left.map(|id| self.tree.node_ref(id))
    }

    /// The right child.
    pub fn right(&self) -> Option<NodeRef<'a>> {
        self.node().right.map(|id| self.tree.node_ref(id))
    }

    /// The parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node().parent.map(|id| self.tree.node_ref(id))
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        !self.has_child()
    }

    /// Whether this node has at least one child.
    pub fn has_child(&self) -> bool {
        let node = self.node();
        node.left.is_some() || node.right.is_some()
    }

    /// Whether this node has both children.
    pub fn has_two_children(&self) -> bool {
        let node = self.node();
        node.left.is_some() && node.right.is_some()
    }

    /// Whether this node hangs from its parent's left slot. The root is neither child.
    pub fn is_left_child(&self) -> bool {
        self.parent()
            .map_or(false, |parent| parent.node().left == Some(self.id))
    }

    /// Whether this node hangs from its parent's right slot. The root is neither child.
    pub fn is_right_child(&self) -> bool {
        self.parent()
            .map_or(false, |parent| parent.node().right == Some(self.id))
    }

    fn node(&self) -> &'a Node {
        self.tree.node(self.id)
    }
}

/// An iterator over the keys of an [`OrderedTree`] in ascending order.
///
/// This struct is created by [`OrderedTree::iter`].
pub struct Iter<'a> {
    tree: &'a OrderedTree,
    // Nodes whose left subtree has been queued but which haven't been yielded yet.
    pending: Vec<NodeId>,
}

impl Iter<'_> {
    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.pending.push(id);
            current = self.tree.node(id).left;
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.pending.pop()?;
        let node = self.tree.node(id);
        self.push_left_spine(node.right);
        Some(node.data)
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    /// Whether every node sits within the bounds set by its ancestors and points back at its
    /// parent.
    fn invariants_hold(tree: &OrderedTree) -> bool {
        let mut seen = 0;
        let mut pending: Vec<_> = tree
            .root()
            .map(|root| (root, Key::MIN, Key::MAX))
            .into_iter()
            .collect();
        while let Some((node, low, high)) = pending.pop() {
            seen += 1;
            if node.data() < low || node.data() > high {
                return false;
            }
            if let Some(left) = node.left() {
                if left.parent() != Some(node) {
                    return false;
                }
                pending.push((left, low, node.data()));
            }
            if let Some(right) = node.right() {
                if right.parent() != Some(node) || right.data() <= node.data() {
                    return false;
                }
                pending.push((right, node.data(), high));
            }
        }

        seen == tree.len() && tree.root().map_or(true, |root| root.parent().is_none())
    }

    /// Applies a set of operations to a tree and a sorted vector of expected keys.
    fn do_ops(ops: &[Op<i8>], tree: &mut OrderedTree, expected: &mut Vec<Key>) {
        for op in ops {
            match *op {
                Op::Insert(k) => {
                    let k = Key::from(k);
                    tree.insert(k);
                    let pos = expected.partition_point(|&x| x <= k);
                    expected.insert(pos, k);
                }
                Op::Remove(k) => {
                    let pos = expected.iter().position(|&x| x == Key::from(k));
                    assert_eq!(tree.remove(k.into()), pos.is_some());
                    if let Some(pos) = pos {
                        expected.remove(pos);
                    }
                }
                Op::Traverse => {
                    assert_eq!(&tree.in_order_traversal(), expected);
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = OrderedTree::new();
            let mut expected = Vec::new();

            do_ops(&ops, &mut tree, &mut expected);
            invariants_hold(&tree) && tree.in_order_traversal() == expected
        }
    }

    quickcheck::quickcheck! {
        fn traversals_are_permutations(xs: Vec<i8>) -> bool {
            let tree: OrderedTree = xs.iter().map(|&x| Key::from(x)).collect();
            let capacity = tree.len();

            let mut sorted: Vec<Key> = xs.iter().map(|&x| Key::from(x)).collect();
            sorted.sort_unstable();

            let mut dfs = tree.depth_first_values(capacity).unwrap();
            let mut bfs = tree.breath_first_values(capacity).unwrap();
            dfs.sort_unstable();
            bfs.sort_unstable();

            tree.in_order_traversal() == sorted && dfs == sorted && bfs == sorted
        }
    }

    quickcheck::quickcheck! {
        fn successor_is_next_larger(xs: Vec<i8>) -> bool {
            let tree: OrderedTree = xs.iter().map(|&x| Key::from(x)).collect();

            xs.iter().all(|&x| {
                let x = Key::from(x);
                let expected = xs.iter().map(|&y| Key::from(y)).filter(|&y| y > x).min();
                tree.find_inorder_successor(x).map(|n| n.data()) == expected
            })
        }
    }
}
