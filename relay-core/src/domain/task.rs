//! Task domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of work: one shell command and its lifecycle state.
///
/// Structure shared between the server (persists) and the agent (executes).
/// Creation time is a storage concern used only for FIFO ordering and is
/// not part of the wire record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub command: String,
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    pub finished_at: Option<chrono::DateTime<chrono::Utc>>,
    pub status: TaskStatus,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub exit_code: Option<i32>,
}

/// Task lifecycle status
///
/// Transitions are one-way: `Queued -> InProgress -> Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Queued,
    InProgress,
    Finished,
}

/// Terminal result reported for a task by a worker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    pub status: TaskStatus,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub exit_code: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Queued).unwrap(),
            "\"queued\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::Finished).unwrap(),
            "\"finished\""
        );
    }

    #[test]
    fn test_task_emits_nulls_for_unset_fields() {
        let task = Task {
            id: Uuid::new_v4(),
            command: "echo hi".to_string(),
            started_at: None,
            finished_at: None,
            status: TaskStatus::Queued,
            stdout: None,
            stderr: None,
            exit_code: None,
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["status"], "queued");
        assert!(value["started_at"].is_null());
        assert!(value["finished_at"].is_null());
        assert!(value["stdout"].is_null());
        assert!(value["stderr"].is_null());
        assert!(value["exit_code"].is_null());
    }

    #[test]
    fn test_task_round_trips() {
        let task = Task {
            id: Uuid::new_v4(),
            command: "exit 3".to_string(),
            started_at: Some(chrono::Utc::now()),
            finished_at: Some(chrono::Utc::now()),
            status: TaskStatus::Finished,
            stdout: Some(String::new()),
            stderr: Some(String::new()),
            exit_code: Some(3),
        };

        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, task.id);
        assert_eq!(back.status, TaskStatus::Finished);
        assert_eq!(back.exit_code, Some(3));
    }
}
