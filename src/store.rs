//! The todo store façade.

use crate::{
    attachment::{AttachmentLinker, S3AttachmentLinker},
    common,
    config::{CreateMode, StoreConfig, UpdateMode},
    error::{ConfigError, Operation, StoreError},
    table::{DynamoTable, TodoTable},
    todo::{self, TodoItem, TodoPage, UpdateTodoRequest},
    write,
};

use aws_sdk_dynamodb::{Client, types};
use serde_dynamo::{from_items, to_item};

/// Data access for todos.
///
/// Every method is a single table request (or one paginated sequence of
/// them). Failures are returned unchanged as [`StoreError`].
///
/// ```rust,no_run
/// use todos_access::{store::TodoStore, todo::UpdateTodoRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = TodoStore::from_env().await?;
/// let todos = store.list_by_user("u1").await?;
/// for todo in todos {
///     let request = UpdateTodoRequest {
///         name: todo.name,
///         due_date: todo.due_date,
///         done: true,
///     };
///     store.update(&todo.todo_id, &todo.user_id, request).await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct TodoStore<T, L> {
    create_mode: CreateMode,
    linker: L,
    table: T,
    update_mode: UpdateMode,
}

impl TodoStore<DynamoTable, S3AttachmentLinker> {
    /// Store for the DynamoDB table and S3 bucket named in the environment.
    ///
    /// AWS credentials and region come from the default provider chain.
    pub async fn from_env() -> Result<Self, ConfigError> {
        let config = StoreConfig::from_env()?;
        let linker = S3AttachmentLinker::from_env()?;
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let table = DynamoTable::new(Client::new(&sdk_config), &config);
        Ok(Self::with_config(table, linker, &config))
    }
}

impl<T: TodoTable, L: AttachmentLinker> TodoStore<T, L> {
    /// Store over `table` that upserts on create and updates unconditionally.
    pub fn new(table: T, linker: L) -> Self {
        Self {
            create_mode: CreateMode::default(),
            linker,
            table,
            update_mode: UpdateMode::default(),
        }
    }

    /// Store over `table` using the modes from `config`.
    pub fn with_config(table: T, linker: L, config: &StoreConfig) -> Self {
        Self::new(table, linker)
            .create_mode(config.create_mode)
            .update_mode(config.update_mode)
    }

    /// Set what `create` does on an existing key.
    pub fn create_mode(mut self, create_mode: CreateMode) -> Self {
        self.create_mode = create_mode;
        self
    }

    /// Set what updates do on a missing key.
    pub fn update_mode(mut self, update_mode: UpdateMode) -> Self {
        self.update_mode = update_mode;
        self
    }

    /// The underlying table.
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Every todo of every user, following all scan pages.
    ///
    /// Items come back in the table's native order.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "todos_access.list_all", skip(self), err)
    )]
    pub async fn list_all(&self) -> Result<Vec<TodoItem>, StoreError> {
        let records = self.table.scan_all().await?;
        from_items(records).map_err(|error| StoreError::new(Operation::Scan, error))
    }

    /// One page of todos across all users.
    ///
    /// Pass the returned cursor back to continue; `limit` caps the number of
    /// items evaluated for the page and is raised to at least 1.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "todos_access.list_page", skip(self, cursor), err)
    )]
    pub async fn list_page(
        &self,
        cursor: Option<common::Record>,
        limit: Option<i32>,
    ) -> Result<TodoPage, StoreError> {
        let limit = limit.map(|limit| limit.max(1));
        let page = self.table.scan_page(cursor, limit).await?;
        let items =
            from_items(page.records).map_err(|error| StoreError::new(Operation::Scan, error))?;
        Ok(TodoPage {
            items,
            cursor: page.last_evaluated_key,
        })
    }

    /// Every todo owned by `user_id`, read through the secondary index.
    ///
    /// The index is eventually consistent, so a todo written a moment ago may
    /// not be listed yet.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "todos_access.list_by_user", skip(self), err)
    )]
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<TodoItem>, StoreError> {
        let records = self.table.query_by_index(user_id).await?;
        from_items(records).map_err(|error| StoreError::new(Operation::Query, error))
    }

    /// Persist `item` and hand it back.
    ///
    /// With [`CreateMode::Upsert`] an existing record with the same key is
    /// overwritten; with [`CreateMode::CreateOnly`] the write fails instead.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "todos_access.create",
            skip(self, item),
            fields(user_id = %item.user_id, todo_id = %item.todo_id),
            err
        )
    )]
    pub async fn create(&self, item: TodoItem) -> Result<TodoItem, StoreError> {
        let record: common::Record =
            to_item(&item).map_err(|error| StoreError::new(Operation::Put, error))?;
        self.table.put(record, self.create_mode.into()).await?;
        Ok(item)
    }

    /// Delete the todo `(user_id, todo_id)`.
    ///
    /// Always `true` on success, whether or not the todo existed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "todos_access.remove", skip(self), err)
    )]
    pub async fn remove(&self, user_id: &str, todo_id: &str) -> Result<bool, StoreError> {
        let key = common::key::TodoKey::new(user_id, todo_id);
        self.table.delete_key(key).await?;
        Ok(true)
    }

    /// Overwrite `done`, `dueDate` and `name` of the todo `(user_id, todo_id)`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "todos_access.update", skip(self, request), err)
    )]
    pub async fn update(
        &self,
        todo_id: &str,
        user_id: &str,
        request: UpdateTodoRequest,
    ) -> Result<(), StoreError> {
        let assignments = write::update_item::SetInputs(vec![
            (todo::DONE.to_string(), types::AttributeValue::Bool(request.done)),
            (
                todo::DUE_DATE.to_string(),
                types::AttributeValue::S(request.due_date),
            ),
            (todo::NAME.to_string(), types::AttributeValue::S(request.name)),
        ]);
        let key = common::key::TodoKey::new(user_id, todo_id);
        self.table
            .update_fields(key, assignments, self.update_mode.into())
            .await
    }

    /// Link the attachment of the todo `(user_id, todo_id)` and return its URL.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "todos_access.set_attachment_url", skip(self), err)
    )]
    pub async fn set_attachment_url(
        &self,
        user_id: &str,
        todo_id: &str,
    ) -> Result<String, StoreError> {
        let url = self.linker.url_for(todo_id);
        let assignments = write::update_item::SetInputs(vec![(
            todo::ATTACHMENT_URL.to_string(),
            types::AttributeValue::S(url.clone()),
        )]);
        let key = common::key::TodoKey::new(user_id, todo_id);
        self.table
            .update_fields(key, assignments, self.update_mode.into())
            .await?;
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::table::memory::MemoryTable;

    use rstest::rstest;

    fn linker(todo_id: &str) -> String {
        format!("https://attachments.test/{todo_id}")
    }

    fn store() -> TodoStore<MemoryTable, fn(&str) -> String> {
        TodoStore::new(MemoryTable::default(), linker as fn(&str) -> String)
    }

    fn todo(user_id: &str, todo_id: &str, name: &str) -> TodoItem {
        TodoItem {
            user_id: user_id.to_string(),
            todo_id: todo_id.to_string(),
            name: name.to_string(),
            due_date: "2024-01-01".to_string(),
            done: false,
            attachment_url: None,
        }
    }

    async fn lookup<T: TodoTable, L: AttachmentLinker>(
        store: &TodoStore<T, L>,
        user_id: &str,
        todo_id: &str,
    ) -> Option<TodoItem> {
        store
            .list_by_user(user_id)
            .await
            .unwrap()
            .into_iter()
            .find(|item| item.todo_id == todo_id)
    }

    #[tokio::test]
    async fn test_create_returns_item_unchanged() {
        let store = store();
        let item = todo("u1", "t1", "buy milk");
        assert_eq!(store.create(item.clone()).await.unwrap(), item);
        assert_eq!(lookup(&store, "u1", "t1").await, Some(item));
    }

    #[tokio::test]
    async fn test_create_upserts_by_default() {
        let store = store();
        store.create(todo("u1", "t1", "buy milk")).await.unwrap();
        store.create(todo("u1", "t1", "buy bread")).await.unwrap();
        let items = store.list_by_user("u1").await.unwrap();
        assert_eq!(items, vec![todo("u1", "t1", "buy bread")]);
    }

    #[tokio::test]
    async fn test_create_only_rejects_duplicate_key() {
        let store = store().create_mode(CreateMode::CreateOnly);
        store.create(todo("u1", "t1", "buy milk")).await.unwrap();
        let error = store
            .create(todo("u1", "t1", "buy bread"))
            .await
            .unwrap_err();
        assert_eq!(error.operation(), Operation::Put);
        assert_eq!(
            lookup(&store, "u1", "t1").await.map(|item| item.name),
            Some("buy milk".to_string())
        );
    }

    #[tokio::test]
    async fn test_list_by_user_is_scoped_to_user() {
        let store = store();
        store.create(todo("u1", "t1", "a")).await.unwrap();
        store.create(todo("u1", "t2", "b")).await.unwrap();
        store.create(todo("u2", "t3", "c")).await.unwrap();
        let items = store.list_by_user("u1").await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.user_id == "u1"));
        assert!(store.list_by_user("u3").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_all_spans_users() {
        let store = store();
        store.create(todo("u1", "t1", "a")).await.unwrap();
        store.create(todo("u2", "t2", "b")).await.unwrap();
        let mut keys: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(TodoItem::key)
            .collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                common::key::TodoKey::new("u1", "t1"),
                common::key::TodoKey::new("u2", "t2"),
            ]
        );
    }

    #[rstest]
    #[case::one_per_page(1)]
    #[case::two_per_page(2)]
    #[case::single_page(10)]
    #[tokio::test]
    async fn test_list_page_visits_every_item_once(#[case] limit: i32) {
        let store = store();
        for index in 0..5 {
            store
                .create(todo("u1", &format!("t{index}"), "a"))
                .await
                .unwrap();
        }
        let mut seen = Vec::new();
        let mut cursor = None;
        loop {
            let page = store.list_page(cursor, Some(limit)).await.unwrap();
            assert!(page.items.len() <= limit as usize);
            seen.extend(page.items.into_iter().map(|item| item.todo_id));
            cursor = page.cursor;
            if cursor.is_none() {
                break;
            }
        }
        assert_eq!(seen, vec!["t0", "t1", "t2", "t3", "t4"]);
    }

    #[tokio::test]
    async fn test_list_page_zero_limit_still_advances() {
        let store = store();
        store.create(todo("u1", "t0", "a")).await.unwrap();
        store.create(todo("u1", "t1", "b")).await.unwrap();
        let page = store.list_page(None, Some(0)).await.unwrap();
        assert_eq!(page.items, vec![todo("u1", "t0", "a")]);
        let page = store.list_page(page.cursor, Some(0)).await.unwrap();
        assert_eq!(page.items, vec![todo("u1", "t1", "b")]);
        assert_eq!(page.cursor, None);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = store();
        store.create(todo("u1", "t1", "a")).await.unwrap();
        assert!(store.remove("u1", "t1").await.unwrap());
        assert_eq!(lookup(&store, "u1", "t1").await, None);
        assert!(store.remove("u1", "t1").await.unwrap());
        assert!(store.remove("u1", "does-not-exist").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let store = store();
        store.create(todo("u1", "t1", "buy milk")).await.unwrap();
        let request = UpdateTodoRequest {
            name: "buy bread".to_string(),
            due_date: "2024-02-01".to_string(),
            done: true,
        };
        store.update("t1", "u1", request).await.unwrap();
        let item = lookup(&store, "u1", "t1").await.unwrap();
        assert_eq!(item.name, "buy bread");
        assert_eq!(item.due_date, "2024-02-01");
        assert!(item.done);
    }

    #[tokio::test]
    async fn test_update_unconditional_creates_missing_record() {
        let store = store();
        let request = UpdateTodoRequest {
            name: "a".to_string(),
            due_date: "2024-02-01".to_string(),
            done: false,
        };
        store.update("t1", "u1", request).await.unwrap();
        let record = store
            .table()
            .get(&common::key::TodoKey::new("u1", "t1"))
            .unwrap();
        assert_eq!(
            record.get("name"),
            Some(&types::AttributeValue::S("a".to_string()))
        );
    }

    #[tokio::test]
    async fn test_update_require_existing_rejects_missing_record() {
        let store = store().update_mode(UpdateMode::RequireExisting);
        let request = UpdateTodoRequest::default();
        let error = store.update("t1", "u1", request).await.unwrap_err();
        assert_eq!(error.operation(), Operation::Update);
        assert_eq!(
            store.table().get(&common::key::TodoKey::new("u1", "t1")),
            None
        );
    }

    #[tokio::test]
    async fn test_set_attachment_url() {
        let store = store();
        store.create(todo("u1", "t1", "a")).await.unwrap();
        let url = store.set_attachment_url("u1", "t1").await.unwrap();
        assert_eq!(url, linker("t1"));
        let item = lookup(&store, "u1", "t1").await.unwrap();
        assert_eq!(item.attachment_url, Some(linker("t1")));
        assert_eq!(item.name, "a");
    }

    #[tokio::test]
    async fn test_set_attachment_url_on_missing_todo_keeps_listing_readable() {
        let store = store();
        store.create(todo("u1", "t1", "a")).await.unwrap();
        store.set_attachment_url("u1", "missing").await.unwrap();
        let items = store.list_by_user("u1").await.unwrap();
        assert_eq!(
            items,
            vec![
                TodoItem {
                    user_id: "u1".to_string(),
                    todo_id: "missing".to_string(),
                    attachment_url: Some(linker("missing")),
                    ..Default::default()
                },
                todo("u1", "t1", "a"),
            ]
        );
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_set_attachment_url_require_existing_rejects_missing_record() {
        let store = store().update_mode(UpdateMode::RequireExisting);
        let error = store.set_attachment_url("u1", "t1").await.unwrap_err();
        assert_eq!(error.operation(), Operation::Update);
        assert_eq!(
            store.table().get(&common::key::TodoKey::new("u1", "t1")),
            None
        );
    }

    #[tokio::test]
    async fn test_create_only_accepts_key_after_remove() {
        let store = store().create_mode(CreateMode::CreateOnly);
        store.create(todo("u1", "t1", "buy milk")).await.unwrap();
        assert!(store.remove("u1", "t1").await.unwrap());
        store.create(todo("u1", "t1", "buy bread")).await.unwrap();
        assert_eq!(
            lookup(&store, "u1", "t1").await.map(|item| item.name),
            Some("buy bread".to_string())
        );
    }

    #[tokio::test]
    async fn test_set_attachment_url_uses_todo_id_key() {
        let store = store();
        store.create(todo("u1", "t1", "a")).await.unwrap();
        store.set_attachment_url("u1", "t1").await.unwrap();
        let records = store.table().scan_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].contains_key("fieldId"));
    }

    #[rstest]
    #[case::scan(Operation::Scan)]
    #[case::query(Operation::Query)]
    #[case::put(Operation::Put)]
    #[case::delete(Operation::Delete)]
    #[case::update(Operation::Update)]
    #[tokio::test]
    async fn test_failures_propagate(#[case] operation: Operation) {
        let store = TodoStore::new(MemoryTable::failing(operation), linker as fn(&str) -> String);
        let error = match operation {
            Operation::Scan => store.list_all().await.map(|_| ()),
            Operation::Query => store.list_by_user("u1").await.map(|_| ()),
            Operation::Put => store.create(todo("u1", "t1", "a")).await.map(|_| ()),
            Operation::Delete => store.remove("u1", "t1").await.map(|_| ()),
            Operation::Update => store.set_attachment_url("u1", "t1").await.map(|_| ()),
        }
        .unwrap_err();
        assert_eq!(error.operation(), operation);
    }

    #[tokio::test]
    async fn test_malformed_record_is_a_store_failure() {
        let store = store();
        let record = common::Record::from([
            ("userId".to_string(), types::AttributeValue::S("u1".to_string())),
            ("todoId".to_string(), types::AttributeValue::S("t1".to_string())),
            ("done".to_string(), types::AttributeValue::S("yes".to_string())),
        ]);
        store
            .table()
            .put(record, write::common::WriteCondition::Always)
            .await
            .unwrap();
        let error = store.list_by_user("u1").await.unwrap_err();
        assert_eq!(error.operation(), Operation::Query);
    }
}
