//! Data Transfer Objects for client/server communication
//!
//! DTOs are lightweight representations of domain entities optimized
//! for network transfer.

pub mod task;
