//! Authentication ports.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AccessToken, Credentials, NewUser, User};
use crate::error::DomainError;

/// Account lifecycle collaborator consumed by the HTTP controller.
///
/// Each method is a separate call; implementations do not promise that a
/// `check_if_user_exists` answer still holds when `sign_up` or `sign_in`
/// runs.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Whether an account is registered under `email`.
    async fn check_if_user_exists(&self, email: &str) -> Result<bool, DomainError>;

    /// Create an account and return it.
    async fn sign_up(&self, new_user: NewUser) -> Result<User, DomainError>;

    /// Verify credentials and issue an access token.
    async fn sign_in(&self, credentials: Credentials) -> Result<AccessToken, DomainError>;
}

/// Claims stored in JWT tokens.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub email: String,
    pub exp: i64,
}

/// Token service trait for JWT operations.
pub trait TokenService: Send + Sync {
    /// Generate access token for a user.
    fn generate_token(&self, user_id: Uuid, email: &str) -> Result<String, AuthError>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Credential primitive errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Hashing error: {0}")]
    HashingError(String),
}
