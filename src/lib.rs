//! This crate exposes an unbalanced Binary Search Tree over integer keys whose nodes keep a link
//! back to their parent, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less than or equal to its
//!    own key. Inserting a key twice puts the second copy on the left.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key greater than its own key.
//! 3. Every child's parent link points at the `Node` holding it, and the root has no parent.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. Nothing here rebalances, so inserting keys in sorted order
//! produces a tree whose height is the number of nodes.
//!
//! ## Parent links
//!
//! Parent links make it possible to find a node's inorder successor by climbing instead of
//! searching again from the root. [`OrderedTree`] stores its nodes in an arena and links them
//! with [`NodeId`]s, so the parent link is just an index.
//!
//! ## Traversals
//!
//! Besides the ascending [`OrderedTree::in_order_traversal`], the tree offers a depth first and a
//! breadth first walk. Those are driven by a [`stack::BoundedStack`] and a
//! [`queue::BoundedQueue`] whose [`Capacity`] the caller picks. A capacity too small for the
//! walk's frontier makes it return [`Error::CapacityExceeded`] instead of a truncated result.
//!
//! ```
//! use ordered_tree::{Capacity, OrderedTree};
//!
//! let tree: OrderedTree = [2, 1, 3].iter().copied().collect();
//!
//! assert!(tree.depth_first_values(1).is_err());
//! assert_eq!(tree.depth_first_values(2).unwrap(), vec![2, 1, 3]);
//! assert_eq!(tree.breath_first_values(Capacity::Unbounded).unwrap(), vec![2, 1, 3]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod capacity;
pub mod error;
pub mod queue;
pub mod stack;
mod tree;
mod util;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}

pub use capacity::Capacity;
pub use error::{Error, Result};
pub use tree::{Iter, Key, NodeId, NodeRef, OrderedTree};
