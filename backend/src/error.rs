//! HTTP-facing error taxonomy.
//!
//! Every failure of a request is converted into one `ApiError` at the handler
//! boundary and rendered as a JSON body with an `error` message plus, where
//! available, a diagnostic (`raw` model text or upstream `detail`).

use crate::gemini::UpstreamError;
use crate::services::festivals::extract::ExtractError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, non-string or empty input. `400`.
    #[error("{0}")]
    Validation(String),
    /// The model answered without any text. `502`.
    #[error("No content returned from AI")]
    UpstreamEmpty,
    /// The model answered with text that holds no usable JSON object. `502`.
    #[error("Invalid response format from AI")]
    UpstreamFormat { raw: String },
    /// Transport failure, upstream error status or unexpected envelope. `500`.
    #[error("Internal server error")]
    Internal { detail: Value },
}

impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        ApiError::UpstreamFormat { raw: err.raw }
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        ApiError::Internal {
            detail: err.detail(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamEmpty | ApiError::UpstreamFormat { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::UpstreamFormat { raw } => json!({ "error": self.to_string(), "raw": raw }),
            ApiError::Internal { detail } => json!({ "error": self.to_string(), "detail": detail }),
            _ => json!({ "error": self.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
