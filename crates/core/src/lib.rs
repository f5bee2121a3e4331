//! Functional core for the band service.
//!
//! Pure data types, key construction, validation and the storage contracts.
//! Nothing in this crate performs I/O; the server crate provides the
//! repository implementations and the services that orchestrate them.

pub mod keys;
pub mod music;
pub mod serde;
pub mod storage;
