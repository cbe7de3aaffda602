//! An in-memory B-tree index with pre-emptive split and fill.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        BTree<K> (controller)                    │
//! │   search · insert · delete · inorder_keys · validate · stats    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  insert path                  │  delete path                    │
//! │  split root if full           │  delete_from_node               │
//! │  split_child ─▶ descend       │  fill_child ─▶ descend          │
//! │                               │  borrow_from_prev / _next       │
//! │                               │  merge_children                 │
//! ├─────────────────────────────────────────────────────────────────┤
//! │            Node<K>: keys: Vec<K>, children: Vec<Node<K>>        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Error, config)
//! - [`index`] - Index structures (B-tree)
//!
//! # Quick Start
//! ```
//! use interchangedb_btree::BTree;
//!
//! let mut tree = BTree::new(3);
//! for key in [10, 20, 30, 40, 50, 60] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.height(), 1);
//!
//! tree.delete(&30);
//! assert_eq!(tree.inorder_keys(), vec![10, 20, 40, 50, 60]);
//! tree.validate().unwrap();
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_DEGREE, MIN_DEGREE};
pub use common::{Error, Result};

pub use index::btree::{BTree, Iter, Node, Position, TreeStats};
