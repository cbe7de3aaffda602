//! Error types for the B-tree index.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the index.
///
/// Lookups and deletes of absent keys are not errors; they return `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The tree was constructed with a minimum degree below
    /// [`MIN_DEGREE`](crate::common::config::MIN_DEGREE).
    #[error("Invalid minimum degree {0}: must be at least 2")]
    InvalidDegree(usize),

    /// A structural walk found a node breaking a B-tree invariant.
    ///
    /// This indicates a bug - the public operations never produce it.
    #[error("B-tree invariant violated: {0}")]
    InvariantViolation(String),
}
