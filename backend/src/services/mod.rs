pub mod embedded;
pub mod festivals;

use crate::error::ApiError;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::web;

/// JSON body settings shared by every endpoint.
///
/// Bodies that fail to deserialize (bad syntax, wrong content type, too large)
/// are answered with the same `{ "error": ... }` shape as other validation
/// failures instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| ApiError::Validation(format!("Invalid request body: {}", err)).into())
}

/// Cross-origin policy for browsers loading the front end from another host.
///
/// With `ALLOWED_ORIGIN` unset any origin may call the API. With it set, only
/// that origin gets CORS headers and other preflights are refused.
pub fn cors(allowed_origin: Option<&str>) -> Cors {
    match allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600),
        None => Cors::permissive(),
    }
}
