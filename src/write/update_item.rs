use crate::{common, write};

use aws_sdk_dynamodb::{Client, error, operation, types};
use std::collections;

/// Attribute assignments for a SET update expression, applied in order.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use todos_access::write::update_item;
///
/// let assignments = update_item::SetInputs(vec![
///     ("done".to_string(), AttributeValue::Bool(true)),
/// ]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SetInputs(
    /// `(attribute name, new value)` pairs.
    pub Vec<(String, types::AttributeValue)>,
);

impl From<SetInputs> for common::ExpressionInput {
    fn from(set_inputs: SetInputs) -> Self {
        let operations = set_inputs
            .0
            .into_iter()
            .enumerate()
            .map(|(index, (name, value))| {
                let placeholder = common::add_placeholder(&name);
                let value_placeholder = format!(":set{index}");
                Self {
                    expression: format!("{placeholder} = {value_placeholder}"),
                    expression_attribute_names: collections::HashMap::from([(placeholder, name)]),
                    expression_attribute_values: collections::HashMap::from([(
                        value_placeholder,
                        value,
                    )]),
                }
            })
            .collect();
        let mut operation = Self::merge(", ", operations);
        operation.expression = format!("SET {}", operation.expression);
        operation
    }
}

/// update item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct UpdateItemInput {
    keys: common::Record,
    update_expression: String,
    write_operation: write::common::WriteInput,
}

/// Update item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::{Client, types::AttributeValue};
/// use todos_access::{common, write};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let update_item = write::update_item::UpdateItem {
///     key: common::key::TodoKey::new("u1", "t1"),
///     set: write::update_item::SetInputs(vec![
///         ("done".to_string(), AttributeValue::Bool(true)),
///     ]),
///     write_args: write::common::WriteArgs {
///         table_name: "todos".to_string(),
///         ..Default::default()
///     },
/// };
/// update_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateItem {
    /// The primary key of the record to update.
    pub key: common::key::TodoKey,
    /// The attributes to overwrite.
    pub set: SetInputs,
    /// Write arguments (table name, precondition, return values).
    pub write_args: write::common::WriteArgs,
}

impl From<UpdateItem> for UpdateItemInput {
    fn from(update_item: UpdateItem) -> Self {
        let mut write_operation: write::common::WriteInput = update_item.write_args.into();
        let update_expression = write_operation.merge_expression(update_item.set.into());
        Self {
            keys: update_item.key.into(),
            update_expression,
            write_operation,
        }
    }
}

impl UpdateItem {
    /// Execute the update item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::update_item::UpdateItemOutput,
        error::SdkError<operation::update_item::UpdateItemError>,
    > {
        let update_item: UpdateItemInput = self.into();
        let builder = client
            .update_item()
            .set_key(Some(update_item.keys))
            .update_expression(update_item.update_expression);
        write::common::apply_write_operation!(builder, update_item.write_operation)
            .send()
            .await
    }
}
