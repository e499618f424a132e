use poem::http::StatusCode;
use poem::{IntoResponse, Response};
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

/// Body shared by every error response: `error` carries the HTTP reason phrase.
#[derive(Object, Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Renders errors raised outside the handlers (routing, extractors, content type).
pub async fn render_error(err: poem::Error) -> Response {
    let status = err.status();
    if status.is_server_error() {
        tracing::error!("Request failed: {}", err);
    } else {
        tracing::warn!("Request rejected with {}: {}", status, err);
    }

    poem::web::Json(ErrorResponse::new(status, err.to_string()))
        .with_status(status)
        .into_response()
}
