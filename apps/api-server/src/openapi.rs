//! OpenAPI document generated from the wire types and handler annotations.

use passage_shared::ErrorResponse;
use passage_shared::dto::{SigninRequest, SigninResponse, SignupRequest, SignupResponse};
use utoipa::OpenApi;

use crate::handlers::auth;

#[derive(OpenApi)]
#[openapi(
    info(title = "Passage API", description = "Account signup and signin"),
    paths(auth::signup, auth::signin),
    components(schemas(
        SignupRequest,
        SignupResponse,
        SigninRequest,
        SigninResponse,
        ErrorResponse
    )),
    tags((name = "Authentication & Authorization"))
)]
pub struct ApiDoc;
