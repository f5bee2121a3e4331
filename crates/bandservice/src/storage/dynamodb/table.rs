//! Table bootstrap.
//!
//! `plan_table` is the pure decision; `ensure_table` performs it against
//! DynamoDB and waits for the table to become active.

use std::time::Duration;

use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType, TableStatus,
};
use aws_sdk_dynamodb::Client;
use thiserror::Error;

use super::conversions::{PARTITION_KEY_ATTR, SORT_KEY_ATTR};

const WAIT_ATTEMPTS: u32 = 30;
const WAIT_INTERVAL: Duration = Duration::from_secs(2);

/// Errors raised while bootstrapping the table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),
    #[error("Table '{0}' did not become active in time")]
    Timeout(String),
}

/// What startup has to do with the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TablePlan {
    /// Table doesn't exist, needs to be created.
    Create { table_name: String },
    /// Table exists, nothing to do.
    Keep { table_name: String },
}

/// Pure function: decide what to do given whether the table exists.
pub fn plan_table(exists: bool, table_name: &str) -> TablePlan {
    if exists {
        TablePlan::Keep {
            table_name: table_name.to_string(),
        }
    } else {
        TablePlan::Create {
            table_name: table_name.to_string(),
        }
    }
}

/// Create the table when it is missing and wait until it is active.
pub async fn ensure_table(client: &Client, table_name: &str) -> Result<TablePlan, TableError> {
    let exists = table_status(client, table_name).await?.is_some();
    let plan = plan_table(exists, table_name);

    match &plan {
        TablePlan::Create { table_name } => {
            tracing::info!(table = %table_name, "Creating DynamoDB table");
            create_table(client, table_name).await?;
            wait_for_table_active(client, table_name).await?;
        }
        TablePlan::Keep { table_name } => {
            tracing::debug!(table = %table_name, "DynamoDB table already exists");
        }
    }

    Ok(plan)
}

async fn table_status(client: &Client, table_name: &str) -> Result<Option<TableStatus>, TableError> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(output) => Ok(output
            .table()
            .and_then(|t| t.table_status())
            .cloned()),
        Err(err) => match err.into_service_error() {
            DescribeTableError::ResourceNotFoundException(_) => Ok(None),
            err => Err(TableError::AwsSdk(format!("DescribeTable failed: {:?}", err))),
        },
    }
}

async fn create_table(client: &Client, table_name: &str) -> Result<(), TableError> {
    let key_schema = vec![
        KeySchemaElement::builder()
            .attribute_name(PARTITION_KEY_ATTR)
            .key_type(KeyType::Hash)
            .build()
            .map_err(|e| TableError::AwsSdk(e.to_string()))?,
        KeySchemaElement::builder()
            .attribute_name(SORT_KEY_ATTR)
            .key_type(KeyType::Range)
            .build()
            .map_err(|e| TableError::AwsSdk(e.to_string()))?,
    ];

    let attribute_definitions = vec![
        AttributeDefinition::builder()
            .attribute_name(PARTITION_KEY_ATTR)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(|e| TableError::AwsSdk(e.to_string()))?,
        AttributeDefinition::builder()
            .attribute_name(SORT_KEY_ATTR)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(|e| TableError::AwsSdk(e.to_string()))?,
    ];

    client
        .create_table()
        .table_name(table_name)
        .set_key_schema(Some(key_schema))
        .set_attribute_definitions(Some(attribute_definitions))
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .map_err(|e| TableError::AwsSdk(format!("CreateTable failed: {:?}", e.into_service_error())))?;

    Ok(())
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<(), TableError> {
    for _ in 0..WAIT_ATTEMPTS {
        if let Some(TableStatus::Active) = table_status(client, table_name).await? {
            tracing::info!(table = %table_name, "DynamoDB table is active");
            return Ok(());
        }
        tokio::time::sleep(WAIT_INTERVAL).await;
    }

    Err(TableError::Timeout(table_name.to_string()))
}
