//! In-memory B-tree index.
//!
//! # Components
//! - [`BTree`] - The tree controller: search, insert, delete, traversal
//! - [`Node`] - Read-only view of a node (keys, children, leaf flag)
//! - [`Position`] - Where a searched key lives
//! - [`Iter`] - Ascending borrowing iterator
//! - [`TreeStats`] - Split/merge/borrow counters
//!
//! # Algorithm
//! Both mutations are single top-down passes. Insert splits any full node
//! before entering it; delete tops up any minimal node (borrow or merge)
//! before entering it. Neither ever walks back up to repair a parent.

mod delete;
mod insert;
mod iter;
mod node;
mod stats;
mod tree;
mod validate;

pub use iter::Iter;
pub use node::Node;
pub use stats::TreeStats;
pub use tree::{BTree, Position};
