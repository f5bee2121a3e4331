//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository trait
//! that models the single table as an ordered map keyed by
//! `(partition key, sort key)`. Records are kept as JSON documents so one
//! table holds every entity kind. Data is lost when the repository is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
