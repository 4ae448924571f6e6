//! Error types for folio-core

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for folio-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Configuration could not be resolved, read, or written.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error, optionally tied to a file path.
    #[error("I/O error{}: {source}", fmt_path(.path))]
    Io {
        /// Path involved in the failed operation, if known
        path: Option<PathBuf>,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Content could not be parsed into the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an I/O error annotated with the path that failed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Creates a parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse(message.into())
    }
}

fn fmt_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let e = Error::config("missing port");
        assert_eq!(e.to_string(), "Configuration error: missing port");
    }

    #[test]
    fn test_io_error_with_path_display() {
        let e = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            "/tmp/folio.toml",
        );
        let msg = e.to_string();
        assert!(msg.contains("/tmp/folio.toml"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_io_error_without_path_display() {
        let e: Error = std::io::Error::other("boom").into();
        assert_eq!(e.to_string(), "I/O error: boom");
    }
}
