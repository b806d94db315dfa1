#![deny(missing_docs)]
#![deny(warnings)]

//! # Todos access
//!
//! Data access for todos kept in a DynamoDB table.
//!
//! ## Overview
//!
//! [`store::TodoStore`] turns each todo operation into one table request:
//! - `list_all` / `list_page`: scan the table
//! - `list_by_user`: query the secondary index on `userId`
//! - `create`: put a record (upsert, or create-only when configured)
//! - `remove`: delete by `(userId, todoId)`, idempotently
//! - `update`: overwrite `name`, `dueDate` and `done`
//! - `set_attachment_url`: store the URL an [`attachment::AttachmentLinker`] derives
//!
//! The store is generic over the [`table::TodoTable`] it talks to, and
//! [`table::DynamoTable`] is the production table. Requests are built with
//! typed builders instead of hand-written expression strings:
//!
//! ```no_run
//! use aws_sdk_dynamodb::{Client, types::AttributeValue};
//! use todos_access::{common, write};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = Client::from_conf(aws_sdk_dynamodb::config::Config::builder().build());
//! let update_item = write::update_item::UpdateItem {
//!     key: common::key::TodoKey::new("u1", "t1"),
//!     set: write::update_item::SetInputs(vec![
//!         ("done".to_string(), AttributeValue::Bool(true)),
//!         ("name".to_string(), AttributeValue::S("buy bread".to_string())),
//!     ]),
//!     write_args: write::common::WriteArgs {
//!         condition: write::common::WriteCondition::ItemExists,
//!         table_name: "todos".to_string(),
//!         ..Default::default()
//!     },
//! };
//! // Sent as "SET #done = :set0, #name = :set1" if attribute_exists(#userId)
//! update_item.send(&client).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@store`] - The todo store
//! - [`mod@table`] - The table protocol and its DynamoDB implementation
//! - [`mod@todo`] - Todo records
//! - [`mod@attachment`] - Attachment URL derivation
//! - [`mod@config`] - Environment configuration
//! - [`mod@error`] - Error types
//! - [`mod@common`] - Keys and condition expressions
//! - [`mod@read`] - Scan and Query builders
//! - [`mod@write`] - PutItem, UpdateItem and DeleteItem builders

pub mod attachment;

/// Keys and condition expressions shared by reads and writes.
pub mod common;

pub mod config;

pub mod error;

/// Read requests against the todo table.
pub mod read;

pub mod store;

pub mod table;

pub mod todo;

/// Write requests against the todo table.
pub mod write;

pub use error::{ConfigError, StoreError};
pub use store::TodoStore;
pub use todo::{TodoItem, UpdateTodoRequest};
