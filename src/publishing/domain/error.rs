//! Error types for publishing domain construction failures.

use super::Status;
use thiserror::Error;

/// Errors returned while constructing publishing domain values.
///
/// Validators report problems as [`Status`] values rather than failing;
/// constructors convert a non-OK validation status into one of these
/// variants, so no invalid descriptor is ever observable. Each variant
/// carries the rejecting status.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// Server construction was rejected by validation.
    #[error("invalid server: {}", .0.message())]
    InvalidServer(Status),

    /// Repository construction was rejected by validation.
    #[error("invalid repository: {}", .0.message())]
    InvalidRepository(Status),

    /// Workspace construction was rejected by validation.
    #[error("invalid workspace: {}", .0.message())]
    InvalidWorkspace(Status),
}

impl DomainError {
    /// Returns the validation status that rejected construction.
    #[must_use]
    pub const fn status(&self) -> &Status {
        match self {
            Self::InvalidServer(status)
            | Self::InvalidRepository(status)
            | Self::InvalidWorkspace(status) => status,
        }
    }
}
