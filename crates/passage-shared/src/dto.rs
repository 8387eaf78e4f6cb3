//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create an account.
#[derive(Clone, Deserialize, ToSchema)]
pub struct SignupRequest {
    #[schema(example = "example@example.com")]
    pub email: String,
    #[schema(example = "example")]
    pub username: String,
    #[schema(example = "+123456789")]
    pub phone: String,
    #[schema(example = "V3ry_strong_P@ssword")]
    pub password: String,
}

/// Public view of a newly created account. Never carries password material.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub phone: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request to sign in.
#[derive(Clone, Deserialize, ToSchema)]
pub struct SigninRequest {
    #[schema(example = "example@example.com")]
    pub email: String,
    #[schema(example = "V3ry_strong_P@ssword")]
    pub password: String,
}

/// Bearer credential returned on signin.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SigninResponse {
    pub access_token: String,
}
