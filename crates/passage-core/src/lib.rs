//! # Passage Core
//!
//! The domain layer of the Passage authentication API.
//! This crate holds the user model, the error taxonomy and the ports that
//! the HTTP layer and the infrastructure adapters meet at. It has no web or
//! storage dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
