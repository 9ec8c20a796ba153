//! Fatal errors — conditions that abort a run before a report exists.
//!
//! Syntax and structural problems in targets are never errors here; they
//! become `Fail` results and the run continues. Only environment failures
//! (missing root, unreadable files, walker faults) take this path.

use std::path::PathBuf;

use thiserror::Error;

/// An unexpected condition that aborts the whole run.
///
/// No report is produced when one of these surfaces; the CLI prints the
/// message to stderr and exits non-zero.
#[derive(Debug, Error)]
pub enum FatalError {
    /// The repository root does not exist. Deliberately fatal rather than
    /// an empty report: a CI gate that silently validates nothing is worse
    /// than one that refuses to run.
    #[error("root path not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    /// I/O failure on a specific path (permission denied, file vanished
    /// between discovery and validation, and similar).
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory walker reported a failure not tied to one target.
    #[error("walk error: {0}")]
    Walk(String),
}

impl FatalError {
    /// Attach a path to a raw I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FatalError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_not_found_names_the_path() {
        let err = FatalError::RootNotFound {
            path: PathBuf::from("/no/such/repo"),
        };
        assert_eq!(err.to_string(), "root path not found: /no/such/repo");
    }

    #[test]
    fn io_error_carries_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = FatalError::io("repo/a.kai", inner);
        let text = err.to_string();
        assert!(text.contains("repo/a.kai"), "message was: {text}");
        assert!(text.contains("denied"), "message was: {text}");
    }
}
