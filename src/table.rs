//! The table protocol the store is written against, and its DynamoDB implementation.

#[cfg(test)]
pub(crate) mod memory;

use crate::{
    common,
    config::StoreConfig,
    error::{Operation, StoreError},
    read, write,
};

use aws_sdk_dynamodb::{Client, types};
use std::future::Future;

/// Key-value table operations required of any backing store.
///
/// Records are DynamoDB items. Implementations report every failure as a
/// [`StoreError`] tagged with the operation that failed.
pub trait TodoTable: Send + Sync {
    /// Every record in the table, across all pages.
    fn scan_all(&self) -> impl Future<Output = Result<Vec<common::Record>, StoreError>> + Send;

    /// One page of records, starting after `start` when given.
    fn scan_page(
        &self,
        start: Option<common::Record>,
        limit: Option<i32>,
    ) -> impl Future<Output = Result<read::common::RecordPage, StoreError>> + Send;

    /// Every record whose partition key is `user_id`, read through the secondary index.
    fn query_by_index(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<common::Record>, StoreError>> + Send;

    /// Write a whole record.
    fn put(
        &self,
        record: common::Record,
        condition: write::common::WriteCondition,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Delete a record by key. Missing keys are not an error.
    fn delete_key(
        &self,
        key: common::key::TodoKey,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Overwrite the named attributes of one record.
    fn update_fields(
        &self,
        key: common::key::TodoKey,
        assignments: write::update_item::SetInputs,
        condition: write::common::WriteCondition,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// A [`TodoTable`] backed by a DynamoDB table and its per-user index.
#[derive(Clone, Debug)]
pub struct DynamoTable {
    client: Client,
    index_name: String,
    table_name: String,
}

impl DynamoTable {
    /// Table named by `config`, reached through `client`.
    pub fn new(client: Client, config: &StoreConfig) -> Self {
        Self {
            client,
            index_name: config.index_name.clone(),
            table_name: config.table_name.clone(),
        }
    }

    /// The table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The secondary index name.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    fn read_args(&self) -> read::common::ReadArgs {
        read::common::ReadArgs {
            table_name: self.table_name.clone(),
            ..Default::default()
        }
    }

    fn write_args(&self, condition: write::common::WriteCondition) -> write::common::WriteArgs {
        write::common::WriteArgs {
            condition,
            table_name: self.table_name.clone(),
            ..Default::default()
        }
    }
}

impl TodoTable for DynamoTable {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "todos_access.scan", skip(self), fields(table = %self.table_name), err)
    )]
    async fn scan_all(&self) -> Result<Vec<common::Record>, StoreError> {
        let scan = read::scan::Scan {
            read_args: self.read_args(),
        };
        let records = scan
            .send_all(&self.client)
            .await
            .map_err(|error| StoreError::new(Operation::Scan, error))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(count = records.len(), "scanned todo table");
        Ok(records)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "todos_access.scan_page", skip(self, start), fields(table = %self.table_name), err)
    )]
    async fn scan_page(
        &self,
        start: Option<common::Record>,
        limit: Option<i32>,
    ) -> Result<read::common::RecordPage, StoreError> {
        let scan = read::scan::Scan {
            read_args: read::common::ReadArgs {
                exclusive_start_key: start,
                limit,
                ..self.read_args()
            },
        };
        scan.send_page(&self.client)
            .await
            .map_err(|error| StoreError::new(Operation::Scan, error))
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "todos_access.query", skip(self), fields(table = %self.table_name, index = %self.index_name), err)
    )]
    async fn query_by_index(&self, user_id: &str) -> Result<Vec<common::Record>, StoreError> {
        let query = read::query::Query {
            read_args: read::common::ReadArgs {
                index_name: Some(self.index_name.clone()),
                ..self.read_args()
            },
            user_id: user_id.to_string(),
        };
        let records = query
            .send_all(&self.client)
            .await
            .map_err(|error| StoreError::new(Operation::Query, error))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(count = records.len(), "queried todo index");
        Ok(records)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "todos_access.put", skip(self, record), fields(table = %self.table_name), err)
    )]
    async fn put(
        &self,
        record: common::Record,
        condition: write::common::WriteCondition,
    ) -> Result<(), StoreError> {
        let put_item = write::put_item::PutItem {
            item: record,
            write_args: self.write_args(condition),
        };
        put_item
            .send(&self.client)
            .await
            .map_err(|error| StoreError::new(Operation::Put, error))?;
        Ok(())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "todos_access.delete", skip(self), fields(table = %self.table_name), err)
    )]
    async fn delete_key(&self, key: common::key::TodoKey) -> Result<(), StoreError> {
        let delete_item = write::delete_item::DeleteItem {
            key,
            write_args: self.write_args(write::common::WriteCondition::Always),
        };
        delete_item
            .send(&self.client)
            .await
            .map_err(|error| StoreError::new(Operation::Delete, error))?;
        Ok(())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "todos_access.update", skip(self, assignments), fields(table = %self.table_name), err)
    )]
    async fn update_fields(
        &self,
        key: common::key::TodoKey,
        assignments: write::update_item::SetInputs,
        condition: write::common::WriteCondition,
    ) -> Result<(), StoreError> {
        let update_item = write::update_item::UpdateItem {
            key,
            set: assignments,
            write_args: write::common::WriteArgs {
                return_values: Some(types::ReturnValue::UpdatedNew),
                ..self.write_args(condition)
            },
        };
        update_item
            .send(&self.client)
            .await
            .map_err(|error| StoreError::new(Operation::Update, error))?;
        Ok(())
    }
}
