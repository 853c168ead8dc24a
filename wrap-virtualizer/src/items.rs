/// A change notification from the items source.
///
/// Deliver it to the panel after the source (and the generator's index mapping) already reflect
/// the change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemsChanged {
    /// `count` items were inserted at `index`.
    Add { index: usize, count: usize },
    /// `count` items starting at `index` were removed.
    Remove { index: usize, count: usize },
    /// `count` items starting at `index` were replaced by new ones.
    Replace { index: usize, count: usize },
    /// `count` items moved from `old_index` to `new_index`.
    Move {
        old_index: usize,
        new_index: usize,
        count: usize,
    },
    /// The whole collection changed; `count` is the new length.
    Reset { count: usize },
}

impl ItemsChanged {
    /// The item count after this change, given the count before it.
    pub fn apply_to_count(self, count: usize) -> usize {
        match self {
            Self::Add { count: added, .. } => count.saturating_add(added),
            Self::Remove { count: removed, .. } => count.saturating_sub(removed),
            Self::Replace { .. } | Self::Move { .. } => count,
            Self::Reset { count } => count,
        }
    }

    /// `true` when containers realized before the change may no longer map to an item.
    pub fn invalidates_containers(self) -> bool {
        !matches!(self, Self::Add { .. })
    }
}
