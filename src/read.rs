//! Read operations against the todo table.
//!
//! This module provides the two read paths the store needs:
//! - Scanning the whole table, either every page or one page at a time
//! - Querying the per-user secondary index

/// Common arguments and helpers for read operations.
pub mod common;

/// Query operation over the per-user secondary index.
pub mod query;

/// Scan operation over the whole table.
pub mod scan;
