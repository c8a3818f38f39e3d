//! Application error types
//!
//! Unified error handling for the batch runner.

use scores_core::DomainError;
use std::path::PathBuf;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    // Source errors
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed table in {path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Process exit code for this error (sysexits.h values)
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            // EX_DATAERR
            Self::Table { .. } => 65,
            Self::Domain(e) if e.is_validation() || e.is_not_found() => 65,

            // EX_IOERR
            Self::Io { .. } | Self::Output(_) => 74,

            // EX_CONFIG
            Self::Config(_) => 78,
            Self::Domain(e) if e.is_configuration() => 78,

            // EX_SOFTWARE
            Self::Domain(_) | Self::Internal(_) => 70,
        }
    }

    /// Get error code for log output
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io { .. } => "IO_ERROR",
            Self::Table { .. } => "MALFORMED_TABLE",
            Self::Output(_) => "OUTPUT_ERROR",
            Self::Domain(e) => e.code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create an I/O error for a source file
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed table error for a source file
    pub fn table(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Table {
            path: path.into(),
            source,
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
