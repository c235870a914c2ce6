//! Relay Core
//!
//! Core types for the Relay task dispatch system.
//!
//! This crate contains:
//! - Domain types: Core business entities (Task, TaskStatus, TaskResult)
//! - DTOs: Data transfer objects for client/server communication

pub mod domain;
pub mod dto;
