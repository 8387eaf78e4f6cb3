use async_trait::async_trait;

use crate::domain::User;
use crate::error::RepoError;

/// User storage.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Insert a new user. Fails with `RepoError::Constraint` when the email is taken.
    async fn save(&self, user: User) -> Result<User, RepoError>;
}
