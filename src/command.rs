//! Command execution through the host shell.

use std::process::Command;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::report;
use crate::shell;

/// Captured outcome of a single command execution.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stdout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stderr: String,
    pub success: bool,
    pub exit_code: i32,
}

/// Join `tokens` into a command line and execute it via the host shell.
///
/// The command line is passed to the shell as a single string, so shell
/// metacharacters in tokens are interpreted by the shell; callers are
/// responsible for quoting via [`shell::quote`].
///
/// Returns the captured result on success, or [`Error::CommandFailed`]
/// carrying the original command line when the shell reports a non-zero
/// exit status.
pub fn run<S: AsRef<str>>(tokens: &[S]) -> Result<ExecutionResult> {
    let command = shell::command_line(tokens)?;
    let result = execute_shell(&command);

    if !result.success {
        return Err(Error::CommandFailed {
            exit_code: result.exit_code,
            detail: error_text(&result),
            command,
        });
    }

    Ok(result)
}

/// Like [`run`], but reports the failure and terminates the process with
/// exit code 1 instead of returning an error.
///
/// For top-level scripts that have no recovery path.
pub fn run_or_exit<S: AsRef<str>>(tokens: &[S]) -> ExecutionResult {
    match run(tokens) {
        Ok(result) => result,
        Err(err) => report::error_exit(&err.to_string()),
    }
}

fn execute_shell(command: &str) -> ExecutionResult {
    #[cfg(windows)]
    let mut cmd = {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    };

    #[cfg(not(windows))]
    let mut cmd = {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    };

    match cmd.output() {
        Ok(out) => ExecutionResult {
            stdout: String::from_utf8_lossy(&out.stdout).to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).to_string(),
            success: out.status.success(),
            exit_code: out.status.code().unwrap_or(-1),
        },
        Err(e) => ExecutionResult {
            stdout: String::new(),
            stderr: format!("Command error: {}", e),
            success: false,
            exit_code: -1,
        },
    }
}

/// Extract failure detail from a result.
///
/// Prefers stderr, falls back to stdout if stderr is empty.
fn error_text(result: &ExecutionResult) -> String {
    if !result.stderr.trim().is_empty() {
        result.stderr.trim().to_string()
    } else {
        result.stdout.trim().to_string()
    }
}
