//! Error handling module
//!
//! Application-level error type composing the domain and collaborator
//! errors. User-visible translation (exit codes, messages, transport
//! statuses) is the caller's concern.

use crate::application::ports::RepositoryError;
use crate::config::ConfigError;
use crate::domain::DomainError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Domain rule violations, surfaced unchanged
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Propagated unchanged from the repository
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
