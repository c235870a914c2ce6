//! Repository Module
//!
//! Data access layer for the server. Handles all database operations
//! for the task table, including the locking claim/finish transactions.

pub mod task;

// Re-export for convenience
pub use task as task_repository;
