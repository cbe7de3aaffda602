//! Common types and utilities shared across the index.
//!
//! This module contains:
//! - Configuration constants (degree bounds)
//! - Error types

pub mod config;
pub mod error;

pub use error::{Error, Result};
