//! Core domain types
//!
//! This module contains the core domain structures used across Relay services.
//! These types represent the fundamental business entities and are shared between
//! the server (for persistence) and the agent (for execution).

pub mod task;
