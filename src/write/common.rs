use crate::common;

use aws_sdk_dynamodb::types;
use std::collections;

/// Precondition on the targeted record for a write to succeed.
///
/// The check is made against the partition key attribute, which every stored
/// record carries.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum WriteCondition {
    /// No precondition: puts upsert, updates create missing records.
    #[default]
    Always,
    /// The record must already exist.
    ItemExists,
    /// The record must not exist yet.
    ItemAbsent,
}

impl WriteCondition {
    pub(crate) fn get_expression_operation(self) -> Option<common::ExpressionInput> {
        let condition = match self {
            WriteCondition::Always => return None,
            WriteCondition::ItemExists => common::condition::Condition::Exists,
            WriteCondition::ItemAbsent => common::condition::Condition::NotExists,
        };
        let operation = common::condition::KeyCondition::get_expression_operation(
            vec![common::condition::KeyCondition::partition_key(condition)],
            common::condition::LogicalOperator::And,
        );
        Some(operation)
    }
}

/// Internal representation of write operation parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct WriteInput {
    pub(crate) condition_expression: Option<String>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) expression_attribute_values:
        Option<collections::HashMap<String, types::AttributeValue>>,
    pub(crate) return_values: Option<types::ReturnValue>,
    pub(crate) table_name: String,
}

impl WriteInput {
    /// Merge an expression operation into this write operation.
    pub(crate) fn merge_expression(&mut self, operation: common::ExpressionInput) -> String {
        operation.merge_into(
            &mut self.expression_attribute_names,
            &mut self.expression_attribute_values,
        )
    }
}

/// Arguments common to all write operations (Put, Update, Delete).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WriteArgs {
    /// Precondition the targeted record must satisfy.
    ///
    /// When it does not hold, DynamoDB rejects the write with a
    /// conditional check failure.
    pub condition: WriteCondition,
    /// Which item attributes to return in the response.
    pub return_values: Option<types::ReturnValue>,
    /// The name of the table to write to.
    pub table_name: String,
}

impl From<WriteArgs> for WriteInput {
    fn from(write_args: WriteArgs) -> Self {
        let mut operation = Self {
            return_values: write_args.return_values,
            table_name: write_args.table_name,
            ..Default::default()
        };
        if let Some(condition) = write_args.condition.get_expression_operation() {
            operation.condition_expression = Some(operation.merge_expression(condition));
        }
        operation
    }
}

/// apply common write settings to a Put, Update or Delete builder
macro_rules! apply_write_operation {
    ($builder:expr, $write_operation:expr) => {
        $builder
            .set_condition_expression($write_operation.condition_expression)
            .set_expression_attribute_names($write_operation.expression_attribute_names)
            .set_expression_attribute_values($write_operation.expression_attribute_values)
            .set_return_values($write_operation.return_values)
            .table_name($write_operation.table_name)
    };
}

pub(crate) use apply_write_operation;
