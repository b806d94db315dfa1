use crate::common;

use aws_sdk_dynamodb::types;
use std::{collections, ops};

/// Logical operator for combining conditions.
#[derive(Clone, Debug, PartialEq)]
pub enum LogicalOperator {
    /// Logical AND - all conditions must be true.
    And,
    /// Logical OR - at least one condition must be true.
    Or,
}

impl ops::Deref for LogicalOperator {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// Condition applied to a single attribute.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use todos_access::common::condition;
///
/// let eq = condition::Condition::Equals(AttributeValue::S("u1".to_string()));
/// let exists = condition::Condition::Exists;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    /// The attribute equals the given value.
    Equals(types::AttributeValue),
    /// The attribute is present on the item.
    Exists,
    /// The attribute is absent from the item.
    NotExists,
}

impl Condition {
    fn get_expression(
        self,
        name: &str,
        name_placeholder: &str,
        index: &mut usize,
    ) -> (String, collections::HashMap<String, types::AttributeValue>) {
        let mut expression_attribute_values = collections::HashMap::new();
        let expression = match self {
            Self::Equals(value) => {
                let value_placeholder = format!(":{name}_eq{index}");
                *index += 1;
                let expression = format!("{name_placeholder} = {value_placeholder}");
                expression_attribute_values.insert(value_placeholder, value);
                expression
            }
            Self::Exists => format!("attribute_exists({name_placeholder})"),
            Self::NotExists => format!("attribute_not_exists({name_placeholder})"),
        };
        (expression, expression_attribute_values)
    }
}

/// Condition bound to an attribute name.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyCondition {
    /// The condition to apply to the attribute.
    pub condition: Condition,
    /// The name of the attribute to apply the condition to.
    pub name: String,
}

impl KeyCondition {
    /// Condition on the partition key attribute.
    pub fn partition_key(condition: Condition) -> Self {
        Self {
            condition,
            name: common::key::PARTITION_KEY.to_string(),
        }
    }

    pub(crate) fn get_expression_operation(
        conditions: Vec<Self>,
        operator: LogicalOperator,
    ) -> common::ExpressionInput {
        let mut index = 0;
        let operations = conditions
            .into_iter()
            .map(|key_condition| {
                let placeholder = common::add_placeholder(&key_condition.name);
                let (expression, expression_attribute_values) =
                    key_condition
                        .condition
                        .get_expression(&key_condition.name, &placeholder, &mut index);
                common::ExpressionInput {
                    expression,
                    expression_attribute_names: collections::HashMap::from([(
                        placeholder,
                        key_condition.name,
                    )]),
                    expression_attribute_values,
                }
            })
            .collect();
        common::ExpressionInput::merge(&operator, operations)
    }
}
