//! # Passage Infrastructure
//!
//! Concrete implementations of the ports defined in `passage-core`:
//! Argon2 password hashing, JWT issuance, an in-memory user store, and the
//! `CredentialAuthService` that wires them into an `AuthService`.

pub mod auth;
pub mod repository;

pub use auth::{Argon2PasswordService, CredentialAuthService, JwtConfig, JwtTokenService};
pub use repository::InMemoryUserRepository;
