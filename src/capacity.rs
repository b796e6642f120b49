//! How much room a scratch container is allowed to use.

/// The capacity of a [`BoundedStack`](crate::stack::BoundedStack) or
/// [`BoundedQueue`](crate::queue::BoundedQueue).
///
/// Plain `usize` values convert into [`Capacity::Bounded`], so a traversal can be
/// called as `tree.depth_first_values(8)`.
///
/// # Examples
///
/// ```
/// use ordered_tree::Capacity;
///
/// assert_eq!(Capacity::from(4), Capacity::Bounded(4));
/// assert_eq!(Capacity::default(), Capacity::Unbounded);
/// assert!(Capacity::Bounded(2).admits(1));
/// assert!(!Capacity::Bounded(2).admits(2));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Capacity {
    /// Holds at most this many elements. Adding another is an error.
    Bounded(usize),
    /// Grows as needed.
    Unbounded,
}

impl Default for Capacity {
    fn default() -> Self {
        Self::Unbounded
    }
}

impl From<usize> for Capacity {
    fn from(capacity: usize) -> Self {
        Self::Bounded(capacity)
    }
}

impl Capacity {
    /// Whether a container currently holding `len` elements may take one more.
    pub fn admits(self, len: usize) -> bool {
        match self {
            Self::Bounded(capacity) => len < capacity,
            Self::Unbounded => true,
        }
    }

    /// The element count worth preallocating for. Bounded capacities are
    /// clamped so an absurd bound doesn't allocate up front.
    pub(crate) fn preallocate(self) -> usize {
        match self {
            Self::Bounded(capacity) => capacity.min(64),
            Self::Unbounded => 0,
        }
    }

    /// The bound reported in errors. `Unbounded` never errors so `usize::MAX` is nominal.
    pub(crate) fn limit(self) -> usize {
        match self {
            Self::Bounded(capacity) => capacity,
            Self::Unbounded => usize::MAX,
        }
    }
}
