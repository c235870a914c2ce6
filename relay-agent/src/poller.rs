//! Task poller
//!
//! Polls the server for a queued task and executes it. One task is in
//! flight at a time per agent; running several agent processes is the
//! intended way to scale, and they coordinate only through the server's
//! claim operation.

use std::sync::Arc;
use tokio::time;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::runner;
use relay_client::ServerClient;

/// Task poller that continuously polls for and executes tasks
pub struct TaskPoller {
    config: Config,
    client: Arc<ServerClient>,
}

impl TaskPoller {
    /// Creates a new task poller
    pub fn new(config: Config, client: Arc<ServerClient>) -> Self {
        Self { config, client }
    }

    /// Starts the polling loop
    ///
    /// Runs until the process is terminated. Every per-tick failure is
    /// logged and swallowed; the loop itself never exits on task-level
    /// errors.
    pub async fn run(&self) {
        info!(
            "Starting task poller (interval: {:?})",
            self.config.poll_interval
        );

        let mut interval = time::interval(self.config.poll_interval);

        loop {
            interval.tick().await;

            self.poll_and_execute_once().await;
        }
    }

    /// Performs a single poll cycle
    async fn poll_and_execute_once(&self) {
        debug!("Picking a task");

        let task = match self.client.pick_task().await {
            Ok(task) => task,
            Err(e) if e.is_not_found() => {
                debug!("No queued task available");
                return;
            }
            Err(e) => {
                error!("Failed to pick task: {}", e);
                return;
            }
        };

        info!("Executing task {}: {}", task.id, task.command);

        let result = runner::run_command(&task.command).await;

        // A failed report is logged and dropped: the task stays
        // in_progress and is never re-delivered.
        match self.client.finish_task(task.id, &result).await {
            Ok(finished) => {
                info!(
                    "Task {} finished with exit code {:?}",
                    finished.id, finished.exit_code
                );
            }
            Err(e) => {
                error!("Failed to report result for task {}: {}", task.id, e);
            }
        }
    }
}
