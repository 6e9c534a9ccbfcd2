//! Utility functions shared across layers.
//!
//! - [`like_pattern`] - Escaped substring patterns for `ILIKE` queries

pub mod like_pattern;
