//! Persistence contracts and implementations.
//!
//! # Responsibility
//! - Abstract durable local storage as a string key-value interface.
//! - Serialize the task collection into a single blob under one key.
//!
//! # Invariants
//! - Repository reads recover from corrupt data instead of failing startup.
//! - Repository writes report failures to the caller.

pub mod kv_store;
pub mod task_repo;
