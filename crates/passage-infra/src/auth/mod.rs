//! Authentication implementations.

mod jwt;
mod password;
mod service;

pub use jwt::{JwtConfig, JwtTokenService};
pub use password::Argon2PasswordService;
pub use service::CredentialAuthService;
