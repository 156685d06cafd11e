//! Shell quoting and command-line assembly.

use std::fmt::Display;

use crate::error::{Error, Result};

/// Wrap a value in double quotes for inclusion in a shell command line.
///
/// Useful for paths with spaces. Non-string values are rendered with
/// `Display` first. Embedded double quotes are not escaped; callers must
/// avoid values containing `"`.
pub fn quote(value: impl Display) -> String {
    format!("\"{}\"", value)
}

/// Join command tokens with single spaces into one command line.
///
/// Tokens are joined verbatim, with no quoting or other transformation.
/// An empty token slice is rejected before any process is spawned.
pub fn command_line<S: AsRef<str>>(tokens: &[S]) -> Result<String> {
    if tokens.is_empty() {
        return Err(Error::InvalidArgument(
            "command tokens cannot be empty".to_string(),
        ));
    }

    Ok(tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" "))
}
