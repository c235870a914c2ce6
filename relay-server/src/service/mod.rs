//! Service Module
//!
//! Business logic layer for the server. Services sit between the API
//! handlers and the repository and own the dispatch protocol rules.

pub mod task;

// Re-export for convenience
pub use task as task_service;
