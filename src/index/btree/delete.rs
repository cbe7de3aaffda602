//! Deletion: fill-before-descend.
//!
//! Before the recursion steps into a child holding only `t - 1` keys, that
//! child is topped up to `t` keys by borrowing from a sibling or merging with
//! one. Every node the recursion enters can therefore lose a key without
//! dropping below the minimum, and no repair is needed on the way back up.

use std::borrow::Borrow;
use std::mem;

use tracing::{debug, trace};

use super::node::Node;
use super::tree::{BTree, Rebalancer};

impl<K: Ord> BTree<K> {
    /// Remove one occurrence of `key`, returning the stored key.
    ///
    /// Deleting an absent key (or deleting from an empty tree) is a no-op
    /// and returns `None`. If the root ends up with no keys and a single
    /// child, that child becomes the new root and the tree loses a level.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.root.is_empty() {
            return None;
        }

        let (root, mut rebalancer) = self.parts_mut();
        let removed = rebalancer.delete_from_node(root, key);

        if self.root.is_empty() && !self.root.is_leaf() {
            debug_assert_eq!(self.root.children.len(), 1);
            if let Some(child) = self.root.children.pop() {
                self.root = child;
                self.stats.root_collapses += 1;
                debug!(height = self.height(), "root emptied, shrinking tree");
            }
        }

        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }
}

impl Rebalancer<'_> {
    /// Remove `key` from the subtree rooted at `x`.
    ///
    /// `x` is either the root or holds at least `t` keys.
    fn delete_from_node<K, Q>(&mut self, x: &mut Node<K>, key: &Q) -> Option<K>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        let idx = x.lower_bound(key);
        if idx < x.len() && x.keys[idx].borrow() == key {
            return self.delete_at(x, idx);
        }
        if x.is_leaf() {
            return None;
        }

        let idx = self.ensure_child_can_lose(x, idx);
        self.delete_from_node(&mut x.children[idx], key)
    }

    /// Remove the key at `x.keys[idx]`.
    fn delete_at<K: Ord>(&mut self, x: &mut Node<K>, idx: usize) -> Option<K> {
        if x.is_leaf() {
            Some(x.keys.remove(idx))
        } else {
            self.delete_from_internal(x, idx)
        }
    }

    /// Remove the separator `x.keys[idx]` from internal node `x`.
    ///
    /// The separator is replaced by its in-order predecessor when the left
    /// child can spare a key, else by its successor when the right child
    /// can. When both children are minimal they are merged around the
    /// separator and the removal continues inside the merged node.
    fn delete_from_internal<K: Ord>(&mut self, x: &mut Node<K>, idx: usize) -> Option<K> {
        let t = self.degree;

        if x.children[idx].len() >= t {
            let pred = self.delete_last(&mut x.children[idx])?;
            return Some(mem::replace(&mut x.keys[idx], pred));
        }

        if x.children[idx + 1].len() >= t {
            let succ = self.delete_first(&mut x.children[idx + 1])?;
            return Some(mem::replace(&mut x.keys[idx], succ));
        }

        self.merge_children(x, idx);
        // The separator now sits in the middle of the merged child.
        self.delete_at(&mut x.children[idx], t - 1)
    }

    /// Remove and return the rightmost key (the predecessor of the parent's
    /// separator) from the subtree rooted at `x`.
    fn delete_last<K: Ord>(&mut self, x: &mut Node<K>) -> Option<K> {
        if x.is_leaf() {
            return x.keys.pop();
        }
        let last = x.len();
        let idx = self.ensure_child_can_lose(x, last);
        self.delete_last(&mut x.children[idx])
    }

    /// Remove and return the leftmost key (the successor of the parent's
    /// separator) from the subtree rooted at `x`.
    fn delete_first<K: Ord>(&mut self, x: &mut Node<K>) -> Option<K> {
        if x.is_leaf() {
            return if x.keys.is_empty() {
                None
            } else {
                Some(x.keys.remove(0))
            };
        }
        let idx = self.ensure_child_can_lose(x, 0);
        self.delete_first(&mut x.children[idx])
    }

    /// Fill `x.children[idx]` if it is minimal; return the index the child
    /// now lives at.
    fn ensure_child_can_lose<K>(&mut self, x: &mut Node<K>, idx: usize) -> usize {
        if x.children[idx].len() < self.degree {
            self.fill_child(x, idx)
        } else {
            idx
        }
    }

    /// Bring `x.children[idx]` up to at least `t` keys.
    ///
    /// Tries, in order: borrow from the left sibling, borrow from the right
    /// sibling, merge with the right sibling, merge with the left sibling.
    /// Returns the child's index afterwards, which drops by one after a merge
    /// into the left sibling.
    fn fill_child<K>(&mut self, x: &mut Node<K>, idx: usize) -> usize {
        let t = self.degree;

        if idx > 0 && x.children[idx - 1].len() >= t {
            self.borrow_from_prev(x, idx);
            idx
        } else if idx < x.len() && x.children[idx + 1].len() >= t {
            self.borrow_from_next(x, idx);
            idx
        } else if idx < x.len() {
            self.merge_children(x, idx);
            idx
        } else {
            self.merge_children(x, idx - 1);
            idx - 1
        }
    }

    /// Rotate the left sibling's last key up through the separator into the
    /// front of `x.children[idx]`, carrying the sibling's last child along.
    fn borrow_from_prev<K>(&mut self, x: &mut Node<K>, idx: usize) {
        let (before, after) = x.children.split_at_mut(idx);
        let sibling = &mut before[idx - 1];
        let child = &mut after[0];
        debug_assert!(sibling.len() >= self.degree, "borrow_from_prev: sibling too small");

        if let Some(moved) = sibling.keys.pop() {
            let separator = mem::replace(&mut x.keys[idx - 1], moved);
            child.keys.insert(0, separator);
        }
        if let Some(grandchild) = sibling.children.pop() {
            child.children.insert(0, grandchild);
        }

        self.stats.borrows_left += 1;
        trace!(child = idx, "borrowed from left sibling");
    }

    /// Rotate the right sibling's first key up through the separator onto
    /// the end of `x.children[idx]`, carrying the sibling's first child along.
    fn borrow_from_next<K>(&mut self, x: &mut Node<K>, idx: usize) {
        let (before, after) = x.children.split_at_mut(idx + 1);
        let child = &mut before[idx];
        let sibling = &mut after[0];
        debug_assert!(sibling.len() >= self.degree, "borrow_from_next: sibling too small");

        if !sibling.keys.is_empty() {
            let moved = sibling.keys.remove(0);
            let separator = mem::replace(&mut x.keys[idx], moved);
            child.keys.push(separator);
        }
        if !sibling.is_leaf() {
            child.children.push(sibling.children.remove(0));
        }

        self.stats.borrows_right += 1;
        trace!(child = idx, "borrowed from right sibling");
    }

    /// Merge `x.children[idx + 1]` and the separator `x.keys[idx]` into
    /// `x.children[idx]`, leaving one node of `2t - 1` keys.
    ///
    /// Both children must hold exactly `t - 1` keys.
    fn merge_children<K>(&mut self, x: &mut Node<K>, idx: usize) {
        debug_assert_eq!(x.children[idx].len(), self.degree - 1, "merge: left not minimal");
        debug_assert_eq!(x.children[idx + 1].len(), self.degree - 1, "merge: right not minimal");

        let separator = x.keys.remove(idx);
        let mut right = x.children.remove(idx + 1);
        let left = &mut x.children[idx];

        left.keys.push(separator);
        left.keys.append(&mut right.keys);
        left.children.append(&mut right.children);

        self.stats.merges += 1;
        trace!(child = idx, keys = left.len(), "merged children");
    }
}
