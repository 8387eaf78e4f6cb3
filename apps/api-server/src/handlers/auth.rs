//! Authentication handlers.
//!
//! `AuthController` owns no state beyond its `AuthService`. The existence
//! check and the following create/verify call are separate collaborator
//! calls, so another request may change the same account in between.

use std::sync::Arc;

use actix_web::{HttpResponse, web};

use passage_core::domain::{Credentials, NewUser};
use passage_core::ports::AuthService;
use passage_shared::ErrorResponse;
use passage_shared::dto::{SigninRequest, SigninResponse, SignupRequest, SignupResponse};

use crate::middleware::error::{AppError, AppResult};

pub struct AuthController {
    auth: Arc<dyn AuthService>,
}

impl AuthController {
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self { auth }
    }

    /// Create an account unless one already exists for the email.
    pub async fn signup(&self, req: SignupRequest) -> AppResult<SignupResponse> {
        self.try_signup(req)
            .await
            .inspect_err(|e| log_failure("Error signing up user", e))
    }

    /// Exchange credentials of a known account for an access token.
    pub async fn signin(&self, req: SigninRequest) -> AppResult<SigninResponse> {
        self.try_signin(req)
            .await
            .inspect_err(|e| log_failure("Error signing in user", e))
    }

    async fn try_signup(&self, req: SignupRequest) -> AppResult<SignupResponse> {
        if self.auth.check_if_user_exists(&req.email).await? {
            return Err(AppError::AlreadyExists);
        }

        let user = self
            .auth
            .sign_up(NewUser {
                email: req.email,
                username: req.username,
                phone: req.phone,
                password: req.password,
            })
            .await?;
        tracing::info!("User signed up: {}", user.email);

        Ok(SignupResponse {
            id: user.id.to_string(),
            email: user.email,
            username: user.username,
            phone: user.phone,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        })
    }

    async fn try_signin(&self, req: SigninRequest) -> AppResult<SigninResponse> {
        if !self.auth.check_if_user_exists(&req.email).await? {
            return Err(AppError::NotFound);
        }

        let email = req.email.clone();
        let token = self
            .auth
            .sign_in(Credentials {
                email: req.email,
                password: req.password,
            })
            .await?;
        tracing::info!("User logged in: {}", email);

        Ok(SigninResponse {
            access_token: token.into_inner(),
        })
    }
}

fn log_failure(context: &str, err: &AppError) {
    tracing::error!(detail = ?err, "{context}: {err}");
}

/// POST /auth/signup
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "Authentication & Authorization",
    request_body(content = SignupRequest, description = "User signup data"),
    responses(
        (status = 201, description = "User created", body = SignupResponse),
        (status = 400, description = "User already exists", body = ErrorResponse),
    )
)]
pub async fn signup(
    controller: web::Data<AuthController>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let user = controller.signup(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// POST /auth/signin
#[utoipa::path(
    post,
    path = "/auth/signin",
    tag = "Authentication & Authorization",
    request_body(content = SigninRequest, description = "User signin data"),
    responses(
        (status = 200, description = "Access token issued", body = SigninResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 404, description = "This user is not found", body = ErrorResponse),
    )
)]
pub async fn signin(
    controller: web::Data<AuthController>,
    body: web::Json<SigninRequest>,
) -> AppResult<HttpResponse> {
    let token = controller.signin(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(token))
}
