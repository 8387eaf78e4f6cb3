//! Application state - the collaborators handed to the controllers.

use std::sync::Arc;

use passage_core::ports::AuthService;
use passage_infra::{
    Argon2PasswordService, CredentialAuthService, InMemoryUserRepository, JwtConfig,
    JwtTokenService,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthService>,
}

impl AppState {
    /// Wire the reference `AuthService` over the in-memory user store.
    pub fn new(jwt: JwtConfig) -> Self {
        tracing::warn!("No persistent user store configured. Accounts are kept in memory.");

        let auth = CredentialAuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Argon2PasswordService::new()),
            Arc::new(JwtTokenService::new(jwt)),
        );

        tracing::info!("Application state initialized");

        Self {
            auth: Arc::new(auth),
        }
    }
}
