//! The tree controller: construction, lookups and traversal.
//!
//! Mutations live next door in `insert.rs` and `delete.rs`; both drive the
//! structural primitives through a [`Rebalancer`].

use std::borrow::Borrow;
use std::fmt;

use super::iter::Iter;
use super::node::Node;
use super::stats::TreeStats;
use crate::common::config::{DEFAULT_DEGREE, MIN_DEGREE};
use crate::common::{Error, Result};

/// An in-memory B-tree of minimum degree `t`.
///
/// Every node except the root holds between `t - 1` and `2t - 1` keys, all
/// leaves sit at the same depth, and every internal node with `k` keys owns
/// exactly `k + 1` children. Insert and delete make a single top-down pass,
/// splitting full nodes (insert) or filling minimal nodes (delete) before
/// descending into them, so nothing is ever repaired on the way back up.
///
/// Duplicate keys are kept: inserting an existing key stores a second entry
/// to the right of the equal ones. Use [`BTree::insert_unique`] for set
/// semantics.
///
/// # Example
/// ```
/// use interchangedb_btree::BTree;
///
/// let mut tree = BTree::new(3);
/// for key in [10, 20, 5, 6, 12, 30, 7, 17] {
///     tree.insert(key);
/// }
/// assert!(tree.search(&6).is_some());
/// assert_eq!(tree.delete(&6), Some(6));
/// assert!(tree.search(&6).is_none());
/// assert_eq!(tree.inorder_keys(), vec![5, 7, 10, 12, 17, 20, 30]);
/// ```
#[derive(Debug, Clone)]
pub struct BTree<K> {
    /// Root node; an empty leaf when the tree holds no keys.
    pub(super) root: Node<K>,

    /// Minimum degree `t` (immutable after construction).
    pub(super) degree: usize,

    /// Number of stored keys, duplicates included.
    pub(super) len: usize,

    /// Restructuring counters.
    pub(super) stats: TreeStats,
}

/// Where a searched key was found: the owning node and the key's index in it.
#[derive(Debug)]
pub struct Position<'a, K> {
    node: &'a Node<K>,
    index: usize,
}

impl<K> Clone for Position<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Position<'_, K> {}

impl<'a, K> Position<'a, K> {
    /// The node holding the key.
    pub fn node(&self) -> &'a Node<K> {
        self.node
    }

    /// Index of the key within [`Position::node`].
    pub fn index(&self) -> usize {
        self.index
    }

    /// The stored key.
    pub fn key(&self) -> &'a K {
        &self.node.keys[self.index]
    }
}

/// Structural algorithms shared by insert and delete.
///
/// Borrows the tree's degree and counters separately from the root so the
/// recursive primitives can hold `&mut Node` and still record their work.
pub(super) struct Rebalancer<'a> {
    pub(super) degree: usize,
    pub(super) stats: &'a mut TreeStats,
}

impl<K> BTree<K> {
    /// Create an empty tree with minimum degree `degree`.
    ///
    /// # Panics
    /// Panics if `degree < 2`. Use [`BTree::try_new`] to get an error instead.
    pub fn new(degree: usize) -> Self {
        match Self::try_new(degree) {
            Ok(tree) => tree,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create an empty tree with minimum degree `degree`.
    ///
    /// # Errors
    /// - `Error::InvalidDegree` if `degree < 2`
    pub fn try_new(degree: usize) -> Result<Self> {
        if degree < MIN_DEGREE {
            return Err(Error::InvalidDegree(degree));
        }

        Ok(Self {
            root: Node::new_leaf(),
            degree,
            len: 0,
            stats: TreeStats::new(),
        })
    }

    /// Minimum degree `t` this tree was built with.
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of stored keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of edges from the root to any leaf (0 for a lone root).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut node = &self.root;
        while let Some(child) = node.children.first() {
            node = child;
            height += 1;
        }
        height
    }

    /// The root node, for inspection.
    pub fn root(&self) -> &Node<K> {
        &self.root
    }

    /// Snapshot of the restructuring counters.
    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    /// Zero the restructuring counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Remove every key, leaving an empty leaf root.
    pub fn clear(&mut self) {
        self.root = Node::new_leaf();
        self.len = 0;
    }

    /// Iterate over all keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root, self.len)
    }

    /// Split the borrow of `self` into the root and a rebalancer.
    pub(super) fn parts_mut(&mut self) -> (&mut Node<K>, Rebalancer<'_>) {
        (
            &mut self.root,
            Rebalancer {
                degree: self.degree,
                stats: &mut self.stats,
            },
        )
    }
}

impl<K: Ord> BTree<K> {
    /// Locate `key`.
    ///
    /// At each node this finds the first key `>= key`: an exact match is
    /// returned, a leaf means the key is absent, otherwise the search
    /// continues in the child left of that key.
    pub fn search<Q>(&self, key: &Q) -> Option<Position<'_, K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = &self.root;
        loop {
            let index = node.lower_bound(key);
            if index < node.len() && node.keys[index].borrow() == key {
                return Some(Position { node, index });
            }
            if node.is_leaf() {
                return None;
            }
            node = &node.children[index];
        }
    }

    /// Whether at least one copy of `key` is stored.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Smallest stored key.
    pub fn min(&self) -> Option<&K> {
        self.root.first_key()
    }

    /// Largest stored key.
    pub fn max(&self) -> Option<&K> {
        self.root.last_key()
    }

    /// Greatest stored key strictly less than `key`.
    ///
    /// `key` itself need not be stored.
    pub fn predecessor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut best = None;
        let mut node = &self.root;
        loop {
            let index = node.lower_bound(key);
            if index > 0 {
                best = Some(&node.keys[index - 1]);
            }
            match node.children.get(index) {
                Some(child) => node = child,
                None => return best,
            }
        }
    }

    /// Smallest stored key strictly greater than `key`.
    ///
    /// `key` itself need not be stored.
    pub fn successor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut best = None;
        let mut node = &self.root;
        loop {
            let index = node.upper_bound(key);
            if index < node.len() {
                best = Some(&node.keys[index]);
            }
            match node.children.get(index) {
                Some(child) => node = child,
                None => return best,
            }
        }
    }

    /// All keys in ascending order.
    pub fn inorder_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<K> Default for BTree<K> {
    fn default() -> Self {
        Self::new(DEFAULT_DEGREE)
    }
}

impl<K: Ord> FromIterator<K> for BTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for BTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a BTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Level-indented dump, one node per line.
///
/// ```text
/// [20, 40]
///   [10]
///   [30]
///   [50, 60]
/// ```
impl<K: fmt::Debug> fmt::Display for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_node<K: fmt::Debug>(
            f: &mut fmt::Formatter<'_>,
            node: &Node<K>,
            depth: usize,
        ) -> fmt::Result {
            writeln!(f, "{:indent$}{:?}", "", node.keys, indent = depth * 2)?;
            for child in &node.children {
                write_node(f, child, depth + 1)?;
            }
            Ok(())
        }

        write_node(f, &self.root, 0)
    }
}
