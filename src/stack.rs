//! A LIFO container with a fixed capacity, used as scratch space by
//! [`OrderedTree::depth_first_values`](crate::OrderedTree::depth_first_values).
//!
//! # Examples
//!
//! ```
//! use ordered_tree::stack::BoundedStack;
//!
//! let mut stack = BoundedStack::new(2);
//! stack.push(1).unwrap();
//! stack.push(2).unwrap();
//!
//! assert!(stack.is_full());
//! assert!(stack.push(3).is_err());
//! assert_eq!(stack.peek(), Some(&2));
//! assert_eq!(stack.pop(), Ok(2));
//! ```

use crate::error::{Container, Error, Result};
use crate::Capacity;

/// A stack that refuses pushes past its [`Capacity`].
#[derive(Clone, Debug)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: Capacity,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack.
    pub fn new(capacity: impl Into<Capacity>) -> Self {
        let capacity = capacity.into();
        Self {
            items: Vec::with_capacity(capacity.preallocate()),
            capacity,
        }
    }

    /// Pushes `item` on top, or fails if the stack is full.
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                container: Container::Stack,
                capacity: self.capacity.limit(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the top item, or fails if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::Empty {
            container: Container::Stack,
        })
    }

    /// The top item, if any.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Whether the stack holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another push would fail.
    pub fn is_full(&self) -> bool {
        !self.capacity.admits(self.items.len())
    }

    /// Number of items on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The capacity this stack was created with.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
}
