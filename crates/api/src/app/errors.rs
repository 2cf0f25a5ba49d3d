use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_core::{DomainError, ValidationErrors};

use crate::app::services::ServiceError;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Domain(e) => domain_error_to_response(e),
        ServiceError::LockPoisoned => {
            tracing::error!("product store lock poisoned");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "store unavailable")
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
        DomainError::Validation(e) => validation_error_to_response(&e),
        DomainError::Decode(e) => json_error(StatusCode::BAD_REQUEST, "invalid_json", e.to_string()),
        DomainError::Encode(e) => {
            tracing::error!("failed to encode response: {e}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "encode_error", e.to_string())
        }
    }
}

pub fn validation_error_to_response(err: &ValidationErrors) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({
            "error": "validation_error",
            "message": err.to_string(),
            "violations": err,
        })),
    )
        .into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
