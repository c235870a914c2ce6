//! Task Service
//!
//! Business logic for the task lifecycle: creation, lookup, claiming
//! and finishing. The state machine is `queued -> in_progress ->
//! finished`, driven only by claim and finish; nothing ever moves a
//! task back to `queued`.

use relay_core::domain::task::{Task, TaskResult, TaskStatus};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::task_repository;

/// Service error type
#[derive(Debug)]
pub enum TaskError {
    NotFound(Uuid),
    NoEligibleTask,
    InvalidResult(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for TaskError {
    fn from(err: sqlx::Error) -> Self {
        TaskError::DatabaseError(err)
    }
}

/// Create and enqueue a new task
pub async fn create_task(pool: &PgPool, command: String) -> Result<Task, TaskError> {
    let task = task_repository::create(pool, command).await?;

    tracing::info!("Task created: {}", task.id);

    Ok(task)
}

/// Get a task by ID
pub async fn get_task(pool: &PgPool, id: Uuid) -> Result<Task, TaskError> {
    let task = task_repository::find_by_id(pool, id)
        .await?
        .ok_or(TaskError::NotFound(id))?;

    Ok(task)
}

/// List all tasks
pub async fn list_all_tasks(pool: &PgPool) -> Result<Vec<Task>, TaskError> {
    let tasks = task_repository::list_all(pool).await?;
    Ok(tasks)
}

/// Claim the oldest queued task for execution
///
/// At most one caller ever receives a given task; racing callers are
/// serialized by the repository's row lock.
pub async fn claim_task(pool: &PgPool) -> Result<Task, TaskError> {
    let task = task_repository::claim_next_queued(pool)
        .await?
        .ok_or(TaskError::NoEligibleTask)?;

    tracing::info!("Task {} claimed", task.id);

    Ok(task)
}

/// Finish a task with its terminal result
///
/// A result whose status is anything but `finished` is rejected. An
/// already-finished task is overwritten silently; the protocol does not
/// guard against double-finish.
pub async fn finish_task(pool: &PgPool, id: Uuid, result: TaskResult) -> Result<Task, TaskError> {
    validate_finish_status(result.status)?;

    let task = task_repository::apply_finish(pool, id, result)
        .await?
        .ok_or(TaskError::NotFound(id))?;

    tracing::info!("Task {} finished with exit code {:?}", id, task.exit_code);

    Ok(task)
}

// =============================================================================
// Validation
// =============================================================================

fn validate_finish_status(status: TaskStatus) -> Result<(), TaskError> {
    match status {
        TaskStatus::Finished => Ok(()),
        _ => Err(TaskError::InvalidResult(format!(
            "Invalid finish status: {:?}",
            status
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_finish_status_valid() {
        assert!(validate_finish_status(TaskStatus::Finished).is_ok());
    }

    #[test]
    fn test_validate_finish_status_invalid() {
        assert!(validate_finish_status(TaskStatus::Queued).is_err());
        assert!(validate_finish_status(TaskStatus::InProgress).is_err());
    }
}
