//! Configuration constants for the B-tree index.

/// Smallest legal minimum degree `t`.
///
/// With `t = 2` every node holds 1 to 3 keys (a 2-3-4 tree). Anything
/// smaller cannot split a full node into two non-empty halves.
pub const MIN_DEGREE: usize = 2;

/// Minimum degree used by [`Default`] and [`FromIterator`] constructions.
///
/// [`Default`]: crate::BTree::default
/// [`FromIterator`]: crate::BTree::from_iter
pub const DEFAULT_DEGREE: usize = 3;

/// Maximum number of keys a node may hold for minimum degree `t`.
#[inline]
pub const fn max_keys(t: usize) -> usize {
    2 * t - 1
}

/// Minimum number of keys a non-root node must hold for minimum degree `t`.
#[inline]
pub const fn min_keys(t: usize) -> usize {
    t - 1
}
