//! B-tree node storage.

use std::borrow::Borrow;

/// A single node of the tree.
///
/// Holds an ordered run of keys and, for internal nodes, one more owned child
/// than keys. A node is a leaf exactly when it has no children, so the leaf
/// flag can never disagree with the child list.
///
/// Nodes are read-only outside this module tree; all restructuring goes
/// through [`BTree`](super::BTree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub(super) keys: Vec<K>,
    pub(super) children: Vec<Node<K>>,
}

impl<K> Node<K> {
    /// Create an empty leaf.
    pub(super) fn new_leaf() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an internal node with no keys owning `child` as its only child.
    ///
    /// Only valid as a transient root immediately before splitting `child`.
    pub(super) fn new_root_over(child: Node<K>) -> Self {
        Self {
            keys: Vec::new(),
            children: vec![child],
        }
    }

    /// Number of keys stored in this node.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether this node stores no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The keys of this node, ascending.
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// The children of this node; empty for a leaf.
    #[inline]
    pub fn children(&self) -> &[Node<K>] {
        &self.children
    }

    /// Whether this node holds the maximum `2t - 1` keys.
    #[inline]
    pub(super) fn is_full(&self, degree: usize) -> bool {
        self.keys.len() == 2 * degree - 1
    }
}

impl<K: Ord> Node<K> {
    /// Index of the first key `>= key`, or `len()` if none.
    ///
    /// This is both the candidate match position and the child to descend
    /// into when the key is not in this node.
    pub(super) fn lower_bound<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.keys.partition_point(|k| k.borrow() < key)
    }

    /// Index of the first key `> key`, or `len()` if none.
    ///
    /// Insertion position: duplicates land to the right of equal keys.
    pub(super) fn upper_bound<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.keys.partition_point(|k| k.borrow() <= key)
    }

    /// Rightmost key of the subtree rooted here.
    pub(super) fn last_key(&self) -> Option<&K> {
        let mut node = self;
        while let Some(child) = node.children.last() {
            node = child;
        }
        node.keys.last()
    }

    /// Leftmost key of the subtree rooted here.
    pub(super) fn first_key(&self) -> Option<&K> {
        let mut node = self;
        while let Some(child) = node.children.first() {
            node = child;
        }
        node.keys.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(keys: Vec<i32>) -> Node<i32> {
        Node {
            keys,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_new_leaf_is_empty() {
        let node: Node<i32> = Node::new_leaf();
        assert!(node.is_leaf());
        assert!(node.is_empty());
        assert_eq!(node.len(), 0);
    }

    #[test]
    fn test_new_root_over_is_internal() {
        let root = Node::new_root_over(leaf(vec![1, 2, 3]));
        assert!(!root.is_leaf());
        assert_eq!(root.len(), 0);
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn test_bounds_with_duplicates() {
        let node = leaf(vec![10, 20, 20, 30]);
        assert_eq!(node.lower_bound(&5), 0);
        assert_eq!(node.lower_bound(&20), 1);
        assert_eq!(node.upper_bound(&20), 3);
        assert_eq!(node.lower_bound(&35), 4);
        assert_eq!(node.upper_bound(&35), 4);
    }

    #[test]
    fn test_is_full() {
        assert!(leaf(vec![1, 2, 3]).is_full(2));
        assert!(!leaf(vec![1, 2, 3]).is_full(3));
    }

    #[test]
    fn test_first_and_last_key_descend_to_leaves() {
        let node = Node {
            keys: vec![50],
            children: vec![leaf(vec![10, 20]), leaf(vec![60, 70])],
        };
        assert_eq!(node.first_key(), Some(&10));
        assert_eq!(node.last_key(), Some(&70));
        assert_eq!(Node::<i32>::new_leaf().last_key(), None);
    }
}
