//! Errors reported by the scratch containers and the traversals that use them.

use std::fmt;

/// Names the scratch container an [`Error`] came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Container {
    /// A [`BoundedStack`](crate::stack::BoundedStack).
    Stack,
    /// A [`BoundedQueue`](crate::queue::BoundedQueue).
    Queue,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stack => f.write_str("stack"),
            Self::Queue => f.write_str("queue"),
        }
    }
}

/// Errors triggered by the bounded containers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An element was added to a container already holding `capacity` elements.
    #[error("{container} is full (capacity {capacity})")]
    CapacityExceeded {
        /// The container that overflowed.
        container: Container,
        /// Its fixed capacity.
        capacity: usize,
    },
    /// An element was removed from an empty container.
    #[error("{container} is empty")]
    Empty {
        /// The container that was empty.
        container: Container,
    },
}

/// Shorthand used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
