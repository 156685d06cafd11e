//! Reusable helpers for shell command automation: quoting, command
//! execution via the host shell, and filesystem precondition checks.

pub mod command;
pub mod error;
pub mod fs;
pub mod report;
pub mod shell;

// Re-export the public surface at the crate root for ergonomic use
pub use command::{run, run_or_exit, ExecutionResult};
pub use error::{Error, Result};
pub use fs::{ensure_dir, ensure_dir_exists, ensure_file, ensure_file_exists};
pub use report::{error_exit, error_exit_with_code, report_and_exit, Reporter, StderrReporter};
pub use shell::{command_line, quote};
