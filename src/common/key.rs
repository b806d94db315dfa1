use crate::common;

use aws_sdk_dynamodb::types;

/// Attribute name of the partition key.
pub const PARTITION_KEY: &str = "userId";

/// Attribute name of the sort key.
pub const SORT_KEY: &str = "todoId";

/// Composite primary key of a todo record.
///
/// ```rust
/// use todos_access::common::key;
///
/// let key = key::TodoKey::new("u1", "t1");
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TodoKey {
    /// The owning user.
    pub user_id: String,
    /// The todo, unique within the user's partition.
    pub todo_id: String,
}

impl TodoKey {
    /// Build a key from its two components.
    pub fn new(user_id: impl Into<String>, todo_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            todo_id: todo_id.into(),
        }
    }

    /// Extract the key attributes of a record, if both are present as strings.
    pub fn from_record(record: &common::Record) -> Option<Self> {
        let user_id = record.get(PARTITION_KEY)?.as_s().ok()?;
        let todo_id = record.get(SORT_KEY)?.as_s().ok()?;
        Some(Self::new(user_id.as_str(), todo_id.as_str()))
    }
}

impl From<TodoKey> for common::Record {
    fn from(key: TodoKey) -> Self {
        Self::from([
            (
                PARTITION_KEY.to_string(),
                types::AttributeValue::S(key.user_id),
            ),
            (SORT_KEY.to_string(), types::AttributeValue::S(key.todo_id)),
        ])
    }
}
