use crate::{common, read};

use aws_sdk_dynamodb::{Client, error, operation, types};

/// query operation
#[derive(Clone, Debug, Default, PartialEq)]
struct QueryInput {
    key_condition_expression: String,
    read_operation: read::common::ReadInput,
}

/// Query for every record owned by one user.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use todos_access::read;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let query = read::query::Query {
///     user_id: "u1".to_string(),
///     read_args: read::common::ReadArgs {
///         index_name: Some("UserIdIndex".to_string()),
///         table_name: "todos".to_string(),
///         ..Default::default()
///     },
/// };
/// let records = query.send_all(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    /// Read arguments (table name, index, start key, etc.).
    pub read_args: read::common::ReadArgs,
    /// The partition key value to query for.
    pub user_id: String,
}

impl From<Query> for QueryInput {
    fn from(query: Query) -> Self {
        let mut read_operation: read::common::ReadInput = query.read_args.into();
        let key_condition = common::condition::KeyCondition::partition_key(
            common::condition::Condition::Equals(types::AttributeValue::S(query.user_id)),
        );
        let key_condition_expression = common::condition::KeyCondition::get_expression_operation(
            vec![key_condition],
            common::condition::LogicalOperator::And,
        )
        .merge_into(
            &mut read_operation.expression_attribute_names,
            &mut read_operation.expression_attribute_values,
        );
        Self {
            key_condition_expression,
            read_operation,
        }
    }
}

impl Query {
    /// Execute the query, following every continuation page.
    pub async fn send_all(
        self,
        client: &Client,
    ) -> Result<Vec<common::Record>, error::SdkError<operation::query::QueryError>> {
        let query: QueryInput = self.into();
        let builder = client
            .query()
            .key_condition_expression(query.key_condition_expression);
        let mut paginator = read::common::apply_read_operation!(builder, query.read_operation)
            .into_paginator()
            .send();
        read::common::collect_pages!(paginator)
    }
}
