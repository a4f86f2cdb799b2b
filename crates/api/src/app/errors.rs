use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use samplereg_core::DomainError;
use samplereg_store::StoreError;

/// Map a persistence-layer failure to the wire error taxonomy.
///
/// Domain failures become 4xx with their human-readable message; anything
/// else is an unexpected store failure.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Domain(DomainError::NotFound(msg)) => {
            json_error(StatusCode::NOT_FOUND, "not_found", msg)
        }
        StoreError::Domain(DomainError::Conflict(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "conflict", msg)
        }
        StoreError::Domain(DomainError::InvalidInput(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_input", msg)
        }
        StoreError::Database(e) => {
            tracing::error!("store failure: {e:?}");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                "internal storage error",
            )
        }
    }
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
