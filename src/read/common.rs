use crate::common;

use std::collections;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ReadInput {
    pub(crate) consistent_read: Option<bool>,
    pub(crate) exclusive_start_key: Option<common::Record>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) expression_attribute_values:
        Option<collections::HashMap<String, aws_sdk_dynamodb::types::AttributeValue>>,
    pub(crate) index_name: Option<String>,
    pub(crate) limit: Option<i32>,
    pub(crate) table_name: String,
}

/// Arguments shared by the multi-item reads (Query, Scan).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadArgs {
    /// Whether to use a strongly consistent read.
    ///
    /// Global secondary indexes only support eventually consistent reads, so
    /// leave this unset when `index_name` points at one.
    pub consistent_read: Option<bool>,
    /// Key to resume from, as returned in `last_evaluated_key` by the previous page.
    pub exclusive_start_key: Option<common::Record>,
    /// Secondary index to read instead of the base table.
    pub index_name: Option<String>,
    /// Maximum number of items to evaluate per page.
    pub limit: Option<i32>,
    /// The name of the table to read from.
    pub table_name: String,
}

impl From<ReadArgs> for ReadInput {
    fn from(read_args: ReadArgs) -> Self {
        Self {
            consistent_read: read_args.consistent_read,
            exclusive_start_key: read_args.exclusive_start_key,
            index_name: read_args.index_name,
            limit: read_args.limit,
            table_name: read_args.table_name,
            ..Default::default()
        }
    }
}

/// One page of raw records and the key to resume from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordPage {
    /// Records returned by this page.
    pub records: Vec<common::Record>,
    /// Key of the last evaluated record, `None` once the table is exhausted.
    pub last_evaluated_key: Option<common::Record>,
}

/// drain a paginator into a single vector of records
macro_rules! collect_pages {
    ($paginator:expr) => {{
        let mut records = Vec::new();
        while let Some(page) = $paginator.next().await {
            if let Some(items) = page?.items {
                records.extend(items);
            }
        }
        Ok(records)
    }};
}

pub(crate) use collect_pages;

/// apply common read settings to a Query or Scan builder
macro_rules! apply_read_operation {
    ($builder:expr, $read_operation:expr) => {
        $builder
            .set_consistent_read($read_operation.consistent_read)
            .set_exclusive_start_key($read_operation.exclusive_start_key)
            .set_expression_attribute_names($read_operation.expression_attribute_names)
            .set_expression_attribute_values($read_operation.expression_attribute_values)
            .set_index_name($read_operation.index_name)
            .set_limit($read_operation.limit)
            .table_name($read_operation.table_name)
    };
}

pub(crate) use apply_read_operation;
