//! Write operations against the todo table.
//!
//! This module provides the three write paths the store needs:
//! - Putting a whole record, optionally only when the key is new
//! - Deleting a record by its composite key
//! - Overwriting a set of named attributes on one record

/// Common arguments and helpers for write operations.
pub mod common;

/// Delete item operation.
pub mod delete_item;

/// Put item operation.
pub mod put_item;

/// Update item operation.
pub mod update_item;
