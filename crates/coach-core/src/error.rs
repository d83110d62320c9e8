//! Error types for the coach library.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure reported by the remote data gateway.
///
/// The store treats every variant the same way: the gateway is unavailable
/// and local stub content takes over.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The configured base address is not a usable URL
    #[error("Invalid gateway address '{url}'")]
    InvalidUrl { url: String },
    /// Connection, timeout or body transfer errors
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// The backend answered with a non-2xx status
    #[error("Unexpected status {status}")]
    Status { status: u16 },
    /// The response body did not match the expected shape
    #[error("Decoding error: {0}")]
    Decoding(#[source] serde_json::Error),
}

/// Comprehensive error type for fallible coach operations.
#[derive(Error, Debug)]
pub enum CoachError {
    /// Remote data gateway failures
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CoachError {
        CoachError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CoachError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to CoachError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| CoachError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

/// Specialized extension trait for file-system Results.
pub trait FileResultExt<T> {
    /// Attach the path the failing operation touched.
    fn at_path(self, path: &Path) -> Result<T>;
}

impl<T> FileResultExt<T> for std::result::Result<T, std::io::Error> {
    fn at_path(self, path: &Path) -> Result<T> {
        self.map_err(|source| CoachError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for coach operations
pub type Result<T> = std::result::Result<T, CoachError>;
