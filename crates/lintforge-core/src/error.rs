//! Error types and handling for lintforge operations

use std::path::PathBuf;
use thiserror::Error;

/// Standard Result type for lintforge operations
pub type Result<T> = std::result::Result<T, LintforgeError>;

/// Main error type for lintforge operations
#[derive(Debug, Error)]
pub enum LintforgeError {
    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// A merge source that is neither an object, an array, nor null.
    ///
    /// This is a caller contract violation, never a data problem: fragments
    /// come from plugin-loading code and are always object-shaped.
    #[error("Invalid configuration fragment: expected an object or array, found {found}")]
    InvalidFragment { found: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    InvalidFragment,
    Io,
}

impl LintforgeError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LintforgeError::ConfigError { .. } => ErrorKind::Config,
            LintforgeError::InvalidFragment { .. } => ErrorKind::InvalidFragment,
            LintforgeError::IoError { .. } => ErrorKind::Io,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an invalid-fragment error describing the offending value
    pub fn invalid_fragment(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Bool(_) => "a boolean".to_string(),
            serde_json::Value::Number(n) => format!("the number {n}"),
            serde_json::Value::String(s) => format!("the string {s:?}"),
            other => format!("{other}"),
        };
        Self::InvalidFragment { found }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}
