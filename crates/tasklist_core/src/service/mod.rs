//! Core use-case services.
//!
//! # Responsibility
//! - Own task list state and the mutations applied to it.
//! - Keep presentation callers decoupled from storage details.

pub mod edit_session;
pub mod filter;
pub mod task_store;
