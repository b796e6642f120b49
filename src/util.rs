use crate::Key;

/// Which child slot of a parent a node hangs from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// The side a search for `key` continues on below a node holding `data`.
    /// Equal keys go left, which is also where inserted duplicates land.
    pub(crate) fn descend(key: Key, data: Key) -> Self {
        if key <= data {
            Self::Left
        } else {
            Self::Right
        }
    }
}
