//! Task API Handlers
//!
//! HTTP endpoints for the task lifecycle.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use relay_core::domain::task::{Task, TaskResult};
use relay_core::dto::task::{CreateTask, TaskList};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::error::ApiResult;
use crate::service::task_service;

/// POST /tasks
/// Enqueue a new task
pub async fn create_task(
    State(pool): State<PgPool>,
    Json(req): Json<CreateTask>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    tracing::info!("Creating new task");

    let task = task_service::create_task(&pool, req.command).await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks
/// List all tasks
pub async fn list_tasks(State(pool): State<PgPool>) -> ApiResult<Json<TaskList>> {
    tracing::debug!("Listing tasks");

    let tasks = task_service::list_all_tasks(&pool).await?;

    Ok(Json(TaskList { tasks }))
}

/// GET /tasks/pick
/// Claim the oldest queued task for execution
///
/// Returns 404 when no queued task is available.
pub async fn pick_task(State(pool): State<PgPool>) -> ApiResult<(StatusCode, Json<Task>)> {
    tracing::debug!("Picking a task");

    let task = task_service::claim_task(&pool).await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks/{id}
/// Get task details by ID
pub async fn get_task(State(pool): State<PgPool>, Path(id): Path<Uuid>) -> ApiResult<Json<Task>> {
    tracing::debug!("Getting task: {}", id);

    let task = task_service::get_task(&pool, id).await?;

    Ok(Json(task))
}

/// POST /tasks/{id}/finish
/// Record a task's terminal result
pub async fn finish_task(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Json(result): Json<TaskResult>,
) -> ApiResult<Json<Task>> {
    tracing::info!("Finishing task: {}", id);

    let task = task_service::finish_task(&pool, id, result).await?;

    Ok(Json(task))
}
