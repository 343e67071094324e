use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flota_core::storage::{repository_error_to_status_code, RepositoryError};
use serde_json::json;

/// Error response for the JSON endpoints.
///
/// The bodies are part of the wire contract the frontend consumes, so
/// the messages stay exactly as the original API emitted them. Storage
/// failures are logged with their cause but surface only a generic
/// per-endpoint message.
#[derive(Debug)]
pub enum ApiError {
    /// A repository call failed. Responds `{"error": …}` with the
    /// status derived from the error variant (500 for query failures,
    /// 503 for connection failures).
    Storage {
        mensaje: &'static str,
        source: RepositoryError,
    },
    /// Missing or invalid query parameter. Responds 400 `{"error": …}`.
    BadRequest(&'static str),
    /// No rows matched the search. Responds 404 `{"mensaje": …}`.
    NotFound(&'static str),
}

impl ApiError {
    /// Wraps a repository error with the endpoint's public message.
    pub fn storage(mensaje: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Storage { mensaje, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Storage { mensaje, source } => {
                tracing::error!(error = %source, "repository error");
                let status = StatusCode::from_u16(repository_error_to_status_code(&source))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, Json(json!({ "error": mensaje }))).into_response()
            }
            ApiError::BadRequest(mensaje) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": mensaje })),
            )
                .into_response(),
            ApiError::NotFound(mensaje) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "mensaje": mensaje })),
            )
                .into_response(),
        }
    }
}
