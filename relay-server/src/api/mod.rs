//! API Module
//!
//! HTTP API layer for the server.

pub mod error;
pub mod health;
pub mod task;

use axum::{
    Router,
    routing::{get, post},
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

/// Create the main API router with all endpoints
pub fn create_router(pool: PgPool) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Task endpoints
        .route("/tasks", post(task::create_task))
        .route("/tasks", get(task::list_tasks))
        .route("/tasks/pick", get(task::pick_task))
        .route("/tasks/{id}", get(task::get_task))
        .route("/tasks/{id}/finish", post(task::finish_task))
        // Add state and middleware
        .with_state(pool)
        .layer(TraceLayer::new_for_http())
}
