//! Errors shared by every container in this crate.

/// The ways an operation on a container can fail. Each variant is a precondition violation so
/// nothing is retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// The operation needs at least one element but the container has none.
    #[error("the container is empty")]
    EmptyContainer,
    /// The element is already stored and the container doesn't allow duplicates.
    #[error("the element already exists")]
    DuplicateElement,
    /// The element to remove isn't stored in the container.
    #[error("the element was not found")]
    ElementNotFound,
}

/// Shorthand for results returned by container operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
