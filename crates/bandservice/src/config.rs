use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding every entity (default: "bands")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub table_name: String,
    /// AWS region for the DynamoDB client (default: "us-east-1")
    #[allow(dead_code)]
    pub aws_region: String,
    /// Endpoint override, e.g. a local DynamoDB (default: none)
    #[allow(dead_code)]
    pub dynamodb_endpoint_url: Option<String>,
    /// Create the table on startup when it is missing (default: false)
    #[allow(dead_code)]
    pub create_table: bool,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "bands")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `DYNAMODB_ENDPOINT_URL` - Endpoint override (default: unset)
    /// - `DYNAMODB_CREATE_TABLE` - Create the table if missing (default: false)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("DYNAMODB_TABLE_NAME").unwrap_or_else(|_| "bands".to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            dynamodb_endpoint_url: env::var("DYNAMODB_ENDPOINT_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            create_table: env::var("DYNAMODB_CREATE_TABLE")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
