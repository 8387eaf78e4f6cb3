//! Domain-level error types.

use thiserror::Error;

use crate::ports::AuthError;

/// Failures reported by an `AuthService`.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Duplicate user: {0}")]
    Duplicate(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
