//! Insertion: split-before-descend.

use std::mem;

use tracing::{debug, trace};

use super::node::Node;
use super::tree::{BTree, Rebalancer};

impl<K: Ord> BTree<K> {
    /// Insert `key`.
    ///
    /// A full root is split first, growing the tree by one level, so the
    /// descent below only ever enters nodes with room for one more key.
    /// Duplicates are stored to the right of equal keys.
    pub fn insert(&mut self, key: K) {
        if self.root.is_full(self.degree) {
            let old_root = mem::replace(&mut self.root, Node::new_leaf());
            self.root = Node::new_root_over(old_root);
            self.stats.root_splits += 1;
            debug!(height = self.height(), "root full, growing tree");

            let (root, mut rebalancer) = self.parts_mut();
            rebalancer.split_child(root, 0);
        }

        let (root, mut rebalancer) = self.parts_mut();
        rebalancer.insert_nonfull(root, key);
        self.len += 1;
    }

    /// Insert `key` unless an equal key is already stored.
    ///
    /// Returns whether the key was inserted.
    pub fn insert_unique(&mut self, key: K) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.insert(key);
        true
    }
}

impl Rebalancer<'_> {
    /// Split the full child `parent.children[i]` around its median.
    ///
    /// The child keeps keys `[0, t-1)` and children `[0, t)`; the median
    /// (index `t-1`) moves up to `parent.keys[i]`; a new right sibling at
    /// `parent.children[i+1]` takes keys `[t, 2t-1)` and children `[t, 2t)`.
    /// The parent must not be full.
    fn split_child<K>(&mut self, parent: &mut Node<K>, i: usize) {
        let t = self.degree;
        debug_assert!(!parent.is_full(t), "split_child: parent is full");

        let child = &mut parent.children[i];
        debug_assert!(child.is_full(t), "split_child: child {} is not full", i);

        let mut upper = child.keys.split_off(t - 1);
        let median = upper.remove(0);
        let right_children = if child.is_leaf() {
            Vec::new()
        } else {
            child.children.split_off(t)
        };
        let right = Node {
            keys: upper,
            children: right_children,
        };

        parent.keys.insert(i, median);
        parent.children.insert(i + 1, right);

        self.stats.splits += 1;
        trace!(child = i, keys_each = t - 1, "split child");
    }

    /// Insert `key` into the subtree rooted at `node`, which is not full.
    fn insert_nonfull<K: Ord>(&mut self, node: &mut Node<K>, key: K) {
        debug_assert!(!node.is_full(self.degree), "insert_nonfull: node is full");

        let mut i = node.upper_bound(&key);
        if node.is_leaf() {
            node.keys.insert(i, key);
            return;
        }

        if node.children[i].is_full(self.degree) {
            self.split_child(node, i);
            if node.keys[i] <= key {
                i += 1;
            }
        }
        self.insert_nonfull(&mut node.children[i], key);
    }
}
