//! DynamoDB repository implementation.
//!
//! Implements the generic repository trait from `bandservice_core::storage`
//! for every record type that knows its item conversion.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use bandservice_core::storage::{Repository, Result, SortKeyCondition};

use super::conversions::{key_attributes, key_item, DynamoItem, PARTITION_KEY_ATTR, SORT_KEY_ATTR};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error};
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// Provides async access to the shared table for all entity types.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain with the configured region and
    /// optional endpoint override.
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.aws_region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.dynamodb_endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        Self::new(Client::from_conf(builder.build()), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Get the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Key condition expression and its placeholder values.
#[derive(Debug, Clone, PartialEq, Eq)]
struct KeyCondition {
    expression: String,
    values: Vec<(&'static str, String)>,
}

/// Render a sort key condition as a DynamoDB key condition expression.
///
/// Attribute names go through `#pk`/`#sk` placeholders.
fn key_condition(partition_key: &str, condition: &SortKeyCondition) -> KeyCondition {
    let mut values = vec![(":pk", partition_key.to_string())];
    let sort_clause = match condition {
        SortKeyCondition::BeginsWith(prefix) => {
            values.push((":sk", prefix.clone()));
            "begins_with(#sk, :sk)"
        }
    };

    KeyCondition {
        expression: format!("#pk = :pk AND {sort_clause}"),
        values,
    }
}

#[async_trait]
impl<T> Repository<T> for DynamoDbRepository
where
    T: DynamoItem,
{
    async fn load(&self, partition_key: &str, sort_key: &str) -> Result<Option<T>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_attributes(partition_key, sort_key)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(T::from_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, record: &T) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record.to_item()))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, T::ENTITY_TYPE, record.sort_key()))?;

        Ok(())
    }

    async fn insert(&self, record: &T) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record.to_item()))
            .condition_expression("attribute_not_exists(#pk)")
            .expression_attribute_names("#pk", PARTITION_KEY_ATTR)
            .send()
            .await
            .map_err(|e| map_put_item_error(e, T::ENTITY_TYPE, record.sort_key()))?;

        Ok(())
    }

    async fn delete(&self, record: &T) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_item(record)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn query(&self, partition_key: &str, condition: &SortKeyCondition) -> Result<Vec<T>> {
        let key_condition = key_condition(partition_key, condition);
        let mut records = Vec::new();
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;

        // Drain every page; callers always receive the full match set.
        loop {
            let mut request = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression(&key_condition.expression)
                .expression_attribute_names("#pk", PARTITION_KEY_ATTR)
                .expression_attribute_names("#sk", SORT_KEY_ATTR)
                .set_exclusive_start_key(exclusive_start_key.take());

            for (placeholder, value) in &key_condition.values {
                request =
                    request.expression_attribute_values(*placeholder, AttributeValue::S(value.clone()));
            }

            let result = request.send().await.map_err(map_query_error)?;

            for item in result.items.unwrap_or_default() {
                records.push(T::from_item(&item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(
            partition_key,
            condition = ?condition,
            count = records.len(),
            "DynamoDB query complete"
        );

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begins_with_condition() {
        let condition = key_condition("ARTIST", &SortKeyCondition::begins_with("BAND#1#"));

        assert_eq!(condition.expression, "#pk = :pk AND begins_with(#sk, :sk)");
        assert_eq!(
            condition.values,
            vec![
                (":pk", "ARTIST".to_string()),
                (":sk", "BAND#1#".to_string())
            ]
        );
    }
}
