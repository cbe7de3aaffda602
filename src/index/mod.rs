//! Index structures.
//!
//! - [`btree`] - In-memory B-tree with pre-emptive split and fill

pub mod btree;
