use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use stockist_core::{product::REQUIRED_FIELDS, FormError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("{source}")]
    InvalidForm {
        source: FormError,
        received: serde_json::Value,
    },

    #[error("Endpoint not found")]
    NotFound { method: Method, path: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::MalformedPayload(detail) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Malformed payload", "details": detail }),
            ),
            ApiError::InvalidForm {
                source: FormError::MissingFields { missing },
                received,
            } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Missing required fields",
                    "required": REQUIRED_FIELDS,
                    "missing": missing,
                    "received": received,
                }),
            ),
            ApiError::NotFound { method, path } => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Endpoint not found", "path": path, "method": method.as_str() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
