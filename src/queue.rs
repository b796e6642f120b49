//! A FIFO container with a fixed capacity, used as scratch space by the
//! breadth first traversals of [`OrderedTree`](crate::OrderedTree).
//!
//! # Examples
//!
//! ```
//! use ordered_tree::queue::BoundedQueue;
//!
//! let mut queue = BoundedQueue::new(2);
//! queue.enqueue('a').unwrap();
//! queue.enqueue('b').unwrap();
//!
//! assert!(queue.enqueue('c').is_err());
//! assert_eq!(queue.dequeue(), Ok('a'));
//! assert_eq!(queue.dequeue(), Ok('b'));
//! assert!(queue.dequeue().is_err());
//! ```

use std::collections::VecDeque;

use crate::error::{Container, Error, Result};
use crate::Capacity;

/// A queue that refuses enqueues past its [`Capacity`].
#[derive(Clone, Debug)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: Capacity,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue.
    pub fn new(capacity: impl Into<Capacity>) -> Self {
        let capacity = capacity.into();
        Self {
            items: VecDeque::with_capacity(capacity.preallocate()),
            capacity,
        }
    }

    /// Adds `item` at the back, or fails if the queue is full.
    pub fn enqueue(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                container: Container::Queue,
                capacity: self.capacity.limit(),
            });
        }
        self.items.push_back(item);
        Ok(())
    }

    /// Removes and returns the front item, or fails if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::Empty {
            container: Container::Queue,
        })
    }

    /// The front item, if any.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Whether the queue holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another enqueue would fail.
    pub fn is_full(&self) -> bool {
        !self.capacity.admits(self.items.len())
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The capacity this queue was created with.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
}
