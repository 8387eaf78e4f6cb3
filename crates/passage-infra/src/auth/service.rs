//! `AuthService` backed by a user repository, a password hasher and a token issuer.

use std::sync::Arc;

use async_trait::async_trait;

use passage_core::domain::{AccessToken, Credentials, NewUser, User};
use passage_core::error::{DomainError, RepoError};
use passage_core::ports::{AuthService, PasswordService, TokenService, UserRepository};

pub struct CredentialAuthService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl CredentialAuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }
}

#[async_trait]
impl AuthService for CredentialAuthService {
    async fn check_if_user_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.users.find_by_email(email).await?.is_some())
    }

    async fn sign_up(&self, new_user: NewUser) -> Result<User, DomainError> {
        let password_hash = self.passwords.hash(&new_user.password)?;
        let user = User::new(new_user, password_hash);

        self.users.save(user).await.map_err(|e| match e {
            RepoError::Constraint(msg) => DomainError::Duplicate(msg),
            other => DomainError::Repository(other),
        })
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<AccessToken, DomainError> {
        let user = self
            .users
            .find_by_email(&credentials.email)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        if !self
            .passwords
            .verify(&credentials.password, &user.password_hash)?
        {
            return Err(DomainError::InvalidCredentials);
        }

        let token = self.tokens.generate_token(user.id, &user.email)?;
        Ok(AccessToken(token))
    }
}
