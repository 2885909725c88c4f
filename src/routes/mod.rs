pub mod app_state;
pub mod email_routes;
pub mod summary_routes;

use actix_cors::Cors;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::Method;
use actix_web::{web, HttpResponse, Scope};
use log::warn;

use crate::models::error_response::ErrorResponse;

/// The `/api` scope with both endpoints and JSON body handling.
pub fn api_scope(json_limit: usize) -> Scope {
    web::scope("/api")
        .app_data(json_config(json_limit))
        .configure(summary_routes::init_routes)
        .configure(email_routes::init_routes)
}

/// Cross-origin access for the one front-end origin, with credentials.
pub fn cors(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allowed_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_any_header()
        .supports_credentials()
}

/// Rejects malformed bodies with `{"error": ...}` instead of actix's plain text.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let message = format!("Invalid request body: {}", err);
            warn!("{}", message);
            let response = match &err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    HttpResponse::PayloadTooLarge().json(ErrorResponse::new(message))
                }
                _ => HttpResponse::BadRequest().json(ErrorResponse::new(message)),
            };
            InternalError::from_response(err, response).into()
        })
}
