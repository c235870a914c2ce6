//! Task-related API endpoints

use crate::ServerClient;
use crate::error::Result;
use relay_core::domain::task::{Task, TaskResult};
use relay_core::dto::task::{CreateTask, TaskList};
use uuid::Uuid;

impl ServerClient {
    /// Enqueue a new task
    ///
    /// # Arguments
    /// * `command` - The shell command the task should run
    ///
    /// # Returns
    /// The created task, in `queued` state
    pub async fn create_task(&self, command: impl Into<String>) -> Result<Task> {
        let url = format!("{}/tasks", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&CreateTask {
                command: command.into(),
            })
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// List all tasks
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let url = format!("{}/tasks", self.base_url);
        let response = self.client.get(&url).send().await?;

        let list: TaskList = self.handle_response(response).await?;
        Ok(list.tasks)
    }

    /// Claim the oldest queued task for execution
    ///
    /// Returns a 404 `ApiError` (see [`ClientError::is_not_found`]) when
    /// no queued task is available.
    ///
    /// [`ClientError::is_not_found`]: crate::ClientError::is_not_found
    pub async fn pick_task(&self) -> Result<Task> {
        let url = format!("{}/tasks/pick", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Get a task by ID
    pub async fn get_task(&self, task_id: Uuid) -> Result<Task> {
        let url = format!("{}/tasks/{}", self.base_url, task_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Report a task's terminal result
    ///
    /// # Arguments
    /// * `task_id` - The ID of the task that was executed
    /// * `result` - The execution result; its status must be `finished`
    pub async fn finish_task(&self, task_id: Uuid, result: &TaskResult) -> Result<Task> {
        let url = format!("{}/tasks/{}/finish", self.base_url, task_id);
        let response = self.client.post(&url).json(result).send().await?;

        self.handle_response(response).await
    }
}
