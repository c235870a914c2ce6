//! Task Repository
//!
//! Handles all database operations related to tasks, including the two
//! transactional operations of the dispatch protocol: claiming the next
//! queued task and applying a terminal result. Both take a row-level
//! `FOR UPDATE` lock so that racing callers serialize per row.

use relay_core::domain::task::{Task, TaskResult, TaskStatus};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new task in the database
///
/// The task is created `queued` with a fresh id; every other field the
/// client may have sent is discarded before this point.
pub async fn create(pool: &PgPool, command: String) -> Result<Task, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now();

    sqlx::query(
        r#"
        INSERT INTO tasks (id, command, created_at, status)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(id)
    .bind(&command)
    .bind(now)
    .bind(status_to_string(TaskStatus::Queued))
    .execute(pool)
    .await?;

    Ok(Task {
        id,
        command,
        started_at: None,
        finished_at: None,
        status: TaskStatus::Queued,
        stdout: None,
        stderr: None,
        exit_code: None,
    })
}

/// Find a task by ID
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Task>, sqlx::Error> {
    let row = sqlx::query_as::<_, TaskRow>(
        r#"
        SELECT id, command, created_at, started_at, finished_at,
               status, stdout, stderr, exit_code
        FROM tasks
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// List all tasks
pub async fn list_all(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
    let rows = sqlx::query_as::<_, TaskRow>(
        r#"
        SELECT id, command, created_at, started_at, finished_at,
               status, stdout, stderr, exit_code
        FROM tasks
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Claim the oldest queued task, transitioning it to `in_progress`.
///
/// The locking read blocks if another transaction holds the candidate
/// row. Once that transaction commits, Postgres re-checks the status
/// filter against the updated row; since the row is no longer queued
/// and the LIMIT was already consumed, the unblocked caller comes back
/// empty-handed for this attempt and retries on its next poll. Each
/// task is therefore returned to at most one caller.
///
/// Returns `Ok(None)` when no queued task exists.
pub async fn claim_next_queued(pool: &PgPool) -> Result<Option<Task>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, TaskRow>(
        r#"
        SELECT id, command, created_at, started_at, finished_at,
               status, stdout, stderr, exit_code
        FROM tasks
        WHERE status = $1
        ORDER BY created_at ASC
        LIMIT 1
        FOR UPDATE
        "#,
    )
    .bind(status_to_string(TaskStatus::Queued))
    .fetch_optional(&mut *tx)
    .await?;

    let Some(row) = row else {
        tx.rollback().await?;
        return Ok(None);
    };

    let now = chrono::Utc::now();

    sqlx::query(
        r#"
        UPDATE tasks
        SET status = $1, started_at = $2
        WHERE id = $3
        "#,
    )
    .bind(status_to_string(TaskStatus::InProgress))
    .bind(now)
    .bind(row.id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    let mut task: Task = row.into();
    task.status = TaskStatus::InProgress;
    task.started_at = Some(now);

    Ok(Some(task))
}

/// Apply a terminal result to a task, transitioning it to `finished`.
///
/// The row is read under an exclusive lock so a concurrent claimer of
/// the same row blocks until the finish commits. A task that is already
/// finished is overwritten again; the store does not guard double-finish.
///
/// Returns `Ok(None)` when no task with the given id exists.
pub async fn apply_finish(
    pool: &PgPool,
    id: Uuid,
    result: TaskResult,
) -> Result<Option<Task>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, TaskRow>(
        r#"
        SELECT id, command, created_at, started_at, finished_at,
               status, stdout, stderr, exit_code
        FROM tasks
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(row) = row else {
        tx.rollback().await?;
        return Ok(None);
    };

    let now = chrono::Utc::now();

    sqlx::query(
        r#"
        UPDATE tasks
        SET status = $1, finished_at = $2, stdout = $3, stderr = $4, exit_code = $5
        WHERE id = $6
        "#,
    )
    .bind(status_to_string(TaskStatus::Finished))
    .bind(now)
    .bind(&result.stdout)
    .bind(&result.stderr)
    .bind(result.exit_code)
    .bind(row.id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    let mut task: Task = row.into();
    task.status = TaskStatus::Finished;
    task.finished_at = Some(now);
    task.stdout = result.stdout;
    task.stderr = result.stderr;
    task.exit_code = result.exit_code;

    Ok(Some(task))
}

// =============================================================================
// Helper Functions
// =============================================================================

fn status_to_string(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Queued => "queued",
        TaskStatus::InProgress => "in_progress",
        TaskStatus::Finished => "finished",
    }
}

fn string_to_status(s: &str) -> TaskStatus {
    match s {
        "queued" => TaskStatus::Queued,
        "in_progress" => TaskStatus::InProgress,
        "finished" => TaskStatus::Finished,
        other => {
            // Only store-written values should ever appear here. Map
            // anything unknown to the terminal state so a corrupt row
            // can never become claimable again.
            tracing::warn!("Unknown task status '{}' in database", other);
            TaskStatus::Finished
        }
    }
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: Uuid,
    command: String,
    // Used for FIFO ordering only; not part of the wire record.
    #[allow(dead_code)]
    created_at: chrono::DateTime<chrono::Utc>,
    started_at: Option<chrono::DateTime<chrono::Utc>>,
    finished_at: Option<chrono::DateTime<chrono::Utc>>,
    status: String,
    stdout: Option<String>,
    stderr: Option<String>,
    exit_code: Option<i32>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            command: row.command,
            started_at: row.started_at,
            finished_at: row.finished_at,
            status: string_to_status(&row.status),
            stdout: row.stdout,
            stderr: row.stderr,
            exit_code: row.exit_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_mapping_round_trips() {
        for status in [
            TaskStatus::Queued,
            TaskStatus::InProgress,
            TaskStatus::Finished,
        ] {
            assert_eq!(string_to_status(status_to_string(status)), status);
        }
    }

    #[test]
    fn test_unknown_status_string_is_terminal() {
        // An unrecognized status must never map back to a claimable
        // state; status only ever advances toward finished.
        assert_eq!(string_to_status("corrupted"), TaskStatus::Finished);
        assert_eq!(string_to_status(""), TaskStatus::Finished);
    }
}
