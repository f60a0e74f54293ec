//! The error type returned when rendering fails.

use std::process::ExitStatus;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("layout engine `{engine}` was not found, is Graphviz installed?")]
    EngineNotFound { engine: String },

    #[error("layout engine `{engine}` exited with {status}{}", stderr_suffix(.stderr))]
    EngineFailed {
        engine: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Appends the engine's diagnostics to the message, when it printed any.
fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::process::ExitStatusExt;

    use super::*;

    fn engine_failed(stderr: &str) -> Error {
        Error::EngineFailed {
            engine: "dot".to_owned(),
            // A raw wait status of 1 << 8 is an exit code of 1.
            status: ExitStatus::from_raw(1 << 8),
            stderr: stderr.to_owned(),
        }
    }

    #[test]
    fn engine_failed_with_stderr() {
        assert_eq!(
            engine_failed("syntax error in line 1").to_string(),
            "layout engine `dot` exited with exit status: 1: syntax error in line 1"
        );
    }

    #[test]
    fn engine_failed_without_stderr() {
        assert_eq!(
            engine_failed("").to_string(),
            "layout engine `dot` exited with exit status: 1"
        );
    }
}
