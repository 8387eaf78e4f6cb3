use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// User entity - represents a registered account.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a user from signup data and an already hashed password.
    pub fn new(new_user: NewUser, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: new_user.email,
            username: new_user.username,
            phone: new_user.phone,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Account data submitted at signup. The password is plaintext.
#[derive(Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub phone: String,
    pub password: String,
}

/// Email and plaintext password submitted at signin.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Opaque bearer credential issued on successful signin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// Plaintext passwords never reach a log line through `{:?}`.
impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("phone", &self.phone)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
