//! Error types for tree234.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in tree234.
///
/// The core operations (`insert`, `find`, the display walk) are total and
/// never fail; errors only arise on the checked node-inspection surface,
/// where a caller-supplied [`NodeId`](crate::NodeId) may be stale or
/// fabricated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The node ID does not refer to any node in the arena.
    #[error("node {0} is out of bounds for this arena")]
    NodeOutOfBounds(usize),
}
