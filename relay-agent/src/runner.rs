//! Command runner
//!
//! Executes a task's command through a shell, capturing stdout, stderr
//! and the exit status. Command failure is data: a non-zero exit comes
//! back as a normal `finished` result. Only failure to spawn the shell
//! itself takes the internal path, and even that is folded into a
//! `finished` result with exit code 1 and a diagnostic in stderr, so
//! execution problems never corrupt task state.

use relay_core::domain::task::{TaskResult, TaskStatus};
use tokio::process::Command;
use tracing::{debug, error};

/// Runs a shell command to completion and returns its result
///
/// Output is captured fully (buffered, not streamed). The exit code is
/// -1 when the process was terminated by a signal.
pub async fn run_command(command: &str) -> TaskResult {
    debug!("Executing command: {}", command);

    let output = match Command::new("sh").arg("-c").arg(command).output().await {
        Ok(output) => output,
        Err(e) => {
            let err_msg = format!("failed to start command: {}", e);
            error!("{}", err_msg);
            return TaskResult {
                status: TaskStatus::Finished,
                stdout: None,
                stderr: Some(err_msg),
                exit_code: Some(1),
            };
        }
    };

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    debug!("Command exited with code {}", exit_code);

    TaskResult {
        status: TaskStatus::Finished,
        stdout: Some(stdout),
        stderr: Some(stderr),
        exit_code: Some(exit_code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_captures_stdout() {
        let result = run_command("echo hi").await;
        assert_eq!(result.status, TaskStatus::Finished);
        assert_eq!(result.stdout.as_deref(), Some("hi\n"));
        assert_eq!(result.exit_code, Some(0));
    }

    #[tokio::test]
    async fn test_captures_stderr() {
        let result = run_command("echo oops >&2").await;
        assert_eq!(result.status, TaskStatus::Finished);
        assert_eq!(result.stderr.as_deref(), Some("oops\n"));
        assert_eq!(result.exit_code, Some(0));
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_data() {
        let result = run_command("exit 3").await;
        assert_eq!(result.status, TaskStatus::Finished);
        assert_eq!(result.exit_code, Some(3));
    }

    #[tokio::test]
    async fn test_unknown_command_is_data() {
        let result = run_command("definitely-not-a-real-command-xyz").await;
        // The shell itself spawns fine and reports command-not-found.
        assert_eq!(result.status, TaskStatus::Finished);
        assert_eq!(result.exit_code, Some(127));
        assert!(!result.stderr.unwrap().is_empty());
    }
}
