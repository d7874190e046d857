use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures shared by every puzzle. All of them abort the current input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to parse string as number: '{0}'")]
    MalformedNumber(String),
    #[error("Malformed line '{line}': expected {expected}")]
    MalformedLine { line: String, expected: &'static str },
    #[error("Failed to open file: {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// An internal invariant did not hold, e.g. a node with infinite distance where a finite one
    /// was required.
    #[error("Unreachable state: {0}")]
    Unreachable(String),
}

impl Error {
    pub fn malformed_line(line: impl Into<String>, expected: &'static str) -> Self {
        Self::MalformedLine {
            line: line.into(),
            expected,
        }
    }
}
