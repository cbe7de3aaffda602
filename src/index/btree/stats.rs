//! Structural statistics tracking.

use std::fmt;

/// Counters for the restructuring work a tree has done.
///
/// The tree is mutated through `&mut self`, so plain integers suffice. The
/// struct is `Copy`: [`BTree::stats`](super::BTree::stats) hands out a
/// point-in-time snapshot that can be printed, compared, or diffed.
///
/// # Example
/// ```
/// use interchangedb_btree::BTree;
///
/// let mut tree = BTree::new(2);
/// for key in 1..=4 {
///     tree.insert(key);
/// }
/// let stats = tree.stats();
/// assert_eq!(stats.splits, 1);
/// assert_eq!(stats.root_splits, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of full nodes split in two, root splits included.
    pub splits: u64,

    /// Number of sibling pairs merged around their separator.
    pub merges: u64,

    /// Number of keys rotated in from a left sibling.
    pub borrows_left: u64,

    /// Number of keys rotated in from a right sibling.
    pub borrows_right: u64,

    /// Number of times the root was split (height grew by one).
    pub root_splits: u64,

    /// Number of times an emptied root was replaced by its child
    /// (height shrank by one).
    pub root_collapses: u64,
}

impl TreeStats {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total borrows in either direction.
    pub fn borrows(&self) -> u64 {
        self.borrows_left + self.borrows_right
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ splits: {}, merges: {}, borrows: {}, root_splits: {}, root_collapses: {} }}",
            self.splits,
            self.merges,
            self.borrows(),
            self.root_splits,
            self.root_collapses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = TreeStats::new();
        assert_eq!(stats.splits, 0);
        assert_eq!(stats.merges, 0);
        assert_eq!(stats.borrows(), 0);
    }

    #[test]
    fn test_stats_borrows_sum() {
        let stats = TreeStats {
            borrows_left: 3,
            borrows_right: 4,
            ..TreeStats::default()
        };
        assert_eq!(stats.borrows(), 7);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = TreeStats {
            splits: 100,
            root_collapses: 2,
            ..TreeStats::default()
        };

        stats.reset();

        assert_eq!(stats, TreeStats::new());
    }

    #[test]
    fn test_stats_display() {
        let stats = TreeStats {
            splits: 8,
            merges: 2,
            borrows_left: 1,
            borrows_right: 1,
            root_splits: 3,
            root_collapses: 1,
        };

        let display = format!("{}", stats);

        assert!(display.contains("splits: 8"));
        assert!(display.contains("merges: 2"));
        assert!(display.contains("borrows: 2"));
        assert!(display.contains("root_collapses: 1"));
    }
}
