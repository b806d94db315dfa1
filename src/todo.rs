//! Todo records as they are stored in the table.

use crate::common;

use serde::{Deserialize, Serialize};

/// Attribute name of the todo title.
pub const NAME: &str = "name";

/// Attribute name of the due date.
pub const DUE_DATE: &str = "dueDate";

/// Attribute name of the completion flag.
pub const DONE: &str = "done";

/// Attribute name of the attachment URL.
pub const ATTACHMENT_URL: &str = "attachmentUrl";

/// A persisted todo.
///
/// `(user_id, todo_id)` is the primary key. Records written by an update on a
/// missing key hold only some fields; the rest read back as their defaults.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Partition key: the owning user.
    pub user_id: String,
    /// Sort key: unique within the user's partition.
    pub todo_id: String,
    /// Title of the todo.
    #[serde(default)]
    pub name: String,
    /// Due date, as supplied by the caller.
    #[serde(default)]
    pub due_date: String,
    /// Whether the todo is complete.
    #[serde(default)]
    pub done: bool,
    /// Where the attachment can be fetched, once one has been linked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

impl TodoItem {
    /// The primary key of this item.
    pub fn key(&self) -> common::key::TodoKey {
        common::key::TodoKey::new(self.user_id.as_str(), self.todo_id.as_str())
    }
}

/// Replacement values for the mutable fields of a todo.
///
/// All three fields are always written.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    /// New title.
    pub name: String,
    /// New due date.
    pub due_date: String,
    /// New completion flag.
    pub done: bool,
}

/// One page of todos and the cursor to fetch the next one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TodoPage {
    /// Items on this page.
    pub items: Vec<TodoItem>,
    /// Pass back to continue the listing; `None` when there is nothing left.
    pub cursor: Option<common::Record>,
}
