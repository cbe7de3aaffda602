//! Full structural walk checking the B-tree invariants.

use super::node::Node;
use super::tree::BTree;
use crate::common::config::{max_keys, min_keys};
use crate::common::{Error, Result};

/// Running state of one validation walk.
struct Walk {
    degree: usize,
    leaf_depth: Option<usize>,
}

impl<K: Ord> BTree<K> {
    /// Check every invariant over the whole tree.
    ///
    /// Verifies that keys are ordered within and across nodes, that every
    /// non-root node holds `t-1..=2t-1` keys, that internal nodes have one
    /// more child than keys, that all leaves share a depth, and that the
    /// stored length matches the key count. O(n).
    ///
    /// # Errors
    /// - `Error::InvariantViolation` naming the first breach found
    pub fn validate(&self) -> Result<()> {
        let mut walk = Walk {
            degree: self.degree,
            leaf_depth: None,
        };

        if !self.root.is_leaf() && self.root.is_empty() {
            return Err(violation("internal root has no keys".to_string()));
        }

        let count = walk.check(&self.root, None, None, 0)?;
        if count != self.len {
            return Err(violation(format!(
                "tree reports {} keys but holds {}",
                self.len, count
            )));
        }
        Ok(())
    }
}

impl Walk {
    /// Validate the subtree at `node`, whose keys must lie within
    /// `[lower, upper]`. Returns the number of keys in the subtree.
    fn check<K: Ord>(
        &mut self,
        node: &Node<K>,
        lower: Option<&K>,
        upper: Option<&K>,
        depth: usize,
    ) -> Result<usize> {
        let len = node.len();
        if len > max_keys(self.degree) {
            return Err(violation(format!(
                "node at depth {} has {} keys, max is {}",
                depth,
                len,
                max_keys(self.degree)
            )));
        }
        if depth > 0 && len < min_keys(self.degree) {
            return Err(violation(format!(
                "node at depth {} has {} keys, min is {}",
                depth,
                len,
                min_keys(self.degree)
            )));
        }

        if let Some(i) = node.keys.windows(2).position(|w| w[0] > w[1]) {
            return Err(violation(format!(
                "keys out of order at depth {} index {}",
                depth,
                i + 1
            )));
        }
        if let (Some(lower), Some(first)) = (lower, node.keys.first()) {
            if first < lower {
                return Err(violation(format!(
                    "key below parent separator at depth {}",
                    depth
                )));
            }
        }
        if let (Some(upper), Some(last)) = (upper, node.keys.last()) {
            if last > upper {
                return Err(violation(format!(
                    "key above parent separator at depth {}",
                    depth
                )));
            }
        }

        if node.is_leaf() {
            match self.leaf_depth {
                None => self.leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(violation(format!(
                        "leaf at depth {}, expected {}",
                        depth, expected
                    )));
                }
                Some(_) => {}
            }
            return Ok(len);
        }

        if node.children.len() != len + 1 {
            return Err(violation(format!(
                "internal node at depth {} has {} keys but {} children",
                depth,
                len,
                node.children.len()
            )));
        }

        let mut count = len;
        for (i, child) in node.children.iter().enumerate() {
            let child_lower = if i == 0 { lower } else { node.keys.get(i - 1) };
            let child_upper = if i == len { upper } else { node.keys.get(i) };
            count += self.check(child, child_lower, child_upper, depth + 1)?;
        }
        Ok(count)
    }
}

fn violation(msg: String) -> Error {
    Error::InvariantViolation(msg)
}
