//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record and the view filter enumeration.
//! - Keep serialized field names aligned with the persisted blob layout.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` that is never reused.
//! - Stored tasks always carry non-empty trimmed text.

pub mod filter;
pub mod task;
