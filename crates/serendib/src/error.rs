//! Error types for serendib.
//!
//! This module defines all error types used throughout the serendib crate.
//! The dev-log writer never surfaces these to callers (it swallows storage
//! failures by contract); they are still fully typed so the diagnostic
//! callback and the CLI get real context.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for serendib operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Log sink errors ===
    /// Failed to read a log sink's backing file.
    #[error("failed to read log sink {path}: {source}")]
    SinkRead {
        /// Path to the sink file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a log sink's backing file.
    #[error("failed to write log sink {path}: {source}")]
    SinkWrite {
        /// Path to the sink file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === I/O errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for serendib operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a sink read error.
    #[must_use]
    pub fn sink_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SinkRead {
            path: path.into(),
            source,
        }
    }

    /// Create a sink write error.
    #[must_use]
    pub fn sink_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SinkWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error came from the storage layer of a log sink.
    #[must_use]
    pub fn is_sink_error(&self) -> bool {
        matches!(
            self,
            Self::SinkRead { .. } | Self::SinkWrite { .. } | Self::DirectoryCreate { .. }
        )
    }
}
