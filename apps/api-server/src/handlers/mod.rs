//! HTTP handlers and route configuration.

pub mod auth;
mod docs;

use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/auth")
                .route("/signup", web::post().to(auth::signup))
                .route("/signin", web::post().to(auth::signin)),
        )
        .route("/api-docs/openapi.json", web::get().to(docs::openapi_json));
}
