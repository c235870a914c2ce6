//! Task DTOs for client/server communication

use serde::{Deserialize, Serialize};

use crate::domain::task::Task;

/// Request to enqueue a new task
///
/// Only the command is accepted from clients. Any other field in the
/// payload (id, status, timestamps, results) is ignored; the server
/// assigns its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub command: String,
}

/// Response envelope for listing tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_ignores_client_supplied_fields() {
        let payload = r#"{
            "id": "my_custom_id",
            "command": "some command",
            "status": "finished",
            "stdout": "random",
            "exit_code": 110
        }"#;

        let req: CreateTask = serde_json::from_str(payload).unwrap();
        assert_eq!(req.command, "some command");
    }

    #[test]
    fn test_create_requires_command() {
        let result = serde_json::from_str::<CreateTask>(r#"{"status": "queued"}"#);
        assert!(result.is_err());
    }
}
