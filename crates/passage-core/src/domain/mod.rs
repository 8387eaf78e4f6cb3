//! Domain entities - the core business objects.

mod user;

pub use user::{AccessToken, Credentials, NewUser, User};
