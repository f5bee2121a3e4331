//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the generic
//! repository trait using `aws-sdk-dynamodb`. One table holds every entity;
//! the hash key is `id` (entity tag) and the range key is `sortId`.

mod conversions;
mod error;
mod repository;
mod table;

pub use repository::DynamoDbRepository;
pub use table::ensure_table;
