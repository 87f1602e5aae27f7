//! WSW-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, SweepError>;

/// Top-level error type for Whitespace Sweeper.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("[WSW-1001] root path does not exist: {path}")]
    RootMissing { path: PathBuf },

    #[error("[WSW-1002] root path is not a directory: {path}")]
    RootNotADirectory { path: PathBuf },

    #[error("[WSW-2001] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[WSW-2002] not valid UTF-8 text: {path}")]
    NonUtf8 { path: PathBuf },
}

impl SweepError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RootMissing { .. } => "WSW-1001",
            Self::RootNotADirectory { .. } => "WSW-1002",
            Self::Io { .. } => "WSW-2001",
            Self::NonUtf8 { .. } => "WSW-2002",
        }
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_errors() -> Vec<SweepError> {
        vec![
            SweepError::RootMissing {
                path: PathBuf::new(),
            },
            SweepError::RootNotADirectory {
                path: PathBuf::new(),
            },
            SweepError::Io {
                path: PathBuf::new(),
                source: std::io::Error::other("test"),
            },
            SweepError::NonUtf8 {
                path: PathBuf::new(),
            },
        ]
    }

    #[test]
    fn error_codes_are_unique() {
        let codes: Vec<&str> = all_errors().iter().map(SweepError::code).collect();
        let unique: std::collections::HashSet<&&str> = codes.iter().collect();
        assert_eq!(
            codes.len(),
            unique.len(),
            "error codes must be unique: {codes:?}"
        );
    }

    #[test]
    fn error_codes_have_wsw_prefix() {
        for err in &all_errors() {
            assert!(
                err.code().starts_with("WSW-"),
                "code {} must start with WSW-",
                err.code()
            );
        }
    }

    #[test]
    fn error_display_includes_code() {
        for err in &all_errors() {
            let msg = err.to_string();
            assert!(
                msg.contains(err.code()),
                "display should contain error code {}: {msg}",
                err.code()
            );
        }
    }

    #[test]
    fn io_convenience_constructor() {
        let err = SweepError::io(
            "/tmp/notes.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code(), "WSW-2001");
        assert!(err.to_string().contains("/tmp/notes.txt"));
    }
}
