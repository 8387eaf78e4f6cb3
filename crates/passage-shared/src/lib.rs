//! # Passage Shared
//!
//! Wire types for the authentication API. The same types drive the JSON
//! bodies and the generated OpenAPI document.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
