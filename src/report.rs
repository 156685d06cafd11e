//! Failure reporting and process termination.

use std::io::IsTerminal;

use anstyle::{AnsiColor, Reset, Style};

const ERROR_STYLE: Style = Style::new().bg_color(Some(anstyle::Color::Ansi(AnsiColor::Red)));

/// Sink for user-facing failure messages.
///
/// Core logic depends on this capability rather than on any specific
/// output styling.
pub trait Reporter {
    fn error(&self, message: &str);
}

/// Reporter that writes `[ERROR]`-tagged messages to stderr, with a red
/// background when stderr is a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn error(&self, message: &str) {
        eprintln!(
            "{}",
            format_message(message, std::io::stderr().is_terminal())
        );
    }
}

fn format_message(message: &str, styled: bool) -> String {
    if styled {
        format!("{}[ERROR] {}{}", ERROR_STYLE, message, Reset)
    } else {
        format!("[ERROR] {}", message)
    }
}

/// Report `message` through `reporter` and terminate the process.
pub fn report_and_exit(reporter: &dyn Reporter, message: &str, exit_code: i32) -> ! {
    reporter.error(message);
    std::process::exit(exit_code)
}

/// Report `message` to stderr and terminate the process with exit code 1.
pub fn error_exit(message: &str) -> ! {
    error_exit_with_code(message, 1)
}

/// Report `message` to stderr and terminate the process with `exit_code`.
pub fn error_exit_with_code(message: &str, exit_code: i32) -> ! {
    report_and_exit(&StderrReporter, message, exit_code)
}
