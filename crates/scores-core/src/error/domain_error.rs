//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ChannelId, IdParseError, UserId};

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain layer errors
///
/// Rule rejections and duplicate suppression are not errors; they show up as
/// empty score changes in the ledger.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found in directory: {0}")]
    UserNotFound(UserId),

    #[error("Channel is not configured: {0}")]
    ChannelNotConfigured(ChannelId),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid channel configuration: {0}")]
    InvalidChannelConfig(String),

    #[error("Invalid rule for reaction {reaction:?}: {reason}")]
    InvalidReactionRule { reaction: String, reason: String },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid row {row} in {table} table: {reason}")]
    InvalidRow {
        table: &'static str,
        row: usize,
        reason: String,
    },

    #[error("Invalid identifier: {0}")]
    InvalidId(#[from] IdParseError),

    // =========================================================================
    // Arithmetic
    // =========================================================================
    #[error("Score overflow while summing points for {0}")]
    ScoreOverflow(UserId),
}

impl DomainError {
    /// Get a stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ChannelNotConfigured(_) => "UNKNOWN_CHANNEL",

            // Configuration
            Self::InvalidChannelConfig(_) => "INVALID_CHANNEL_CONFIG",
            Self::InvalidReactionRule { .. } => "INVALID_REACTION_RULE",

            // Validation
            Self::InvalidRow { .. } => "INVALID_ROW",
            Self::InvalidId(_) => "INVALID_ID",

            // Arithmetic
            Self::ScoreOverflow(_) => "SCORE_OVERFLOW",
        }
    }

    /// Create an invalid row error
    pub fn invalid_row(table: &'static str, row: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRow {
            table,
            row,
            reason: reason.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::ChannelNotConfigured(_))
    }

    /// Check if this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidChannelConfig(_) | Self::InvalidReactionRule { .. }
        )
    }

    /// Check if this is an input validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidRow { .. } | Self::InvalidId(_))
    }
}
