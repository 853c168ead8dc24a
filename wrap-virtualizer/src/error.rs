use thiserror::Error;

/// Errors surfaced by layout passes and index-based queries.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// An index outside `[0, count - 1]` was requested.
    ///
    /// This is never clamped: it signals drift between the caller's item count and the panel's.
    #[error("index {index} is out of range for {count} items")]
    IndexOutOfRange { index: usize, count: usize },

    /// The container generator could not produce a container for an item.
    #[error("no container could be generated for item {index}")]
    ContainerUnavailable { index: usize },
}
