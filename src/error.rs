use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Errors rendered to HTTP clients by the router fallbacks.
///
/// The greeting and health handlers cannot fail; these only cover requests
/// that never reach them.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No route for path: {path}")]
    NotFound { path: String },

    #[error("Method not allowed for path: {path}")]
    MethodNotAllowed { path: String },
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    status: u16,
    error: &'a str,
    path: &'a str,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Request rejected");

        let status = self.status();
        let path = match &self {
            AppError::NotFound { path } | AppError::MethodNotAllowed { path } => path.as_str(),
        };
        let body = ErrorBody {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown"),
            path,
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        path: uri.path().to_string(),
    }
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(uri: Uri) -> AppError {
    AppError::MethodNotAllowed {
        path: uri.path().to_string(),
    }
}
