use std::sync::Arc;

use poem::http::{Method, StatusCode, header};
use poem::{Endpoint, IntoResponse, Request, Response};

const APPLICATION_JSON: &str = "application/json";

/// Create and full-replace requests carry a JSON record; like/unlike have no body.
pub fn requires_json(method: &Method, path: &str) -> bool {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    match *method {
        Method::POST => matches!(segments.as_slice(), ["recommendations"]),
        Method::PUT => matches!(segments.as_slice(), ["recommendations", _]),
        _ => false,
    }
}

/// Rejects record bodies not declared as exactly `application/json` with 415,
/// before the request reaches any handler.
pub async fn require_json<E: Endpoint>(ep: Arc<E>, req: Request) -> poem::Result<Response> {
    if requires_json(req.method(), req.uri().path()) {
        let content_type = req.header(header::CONTENT_TYPE);
        if content_type != Some(APPLICATION_JSON) {
            match content_type {
                Some(value) => tracing::error!("Invalid Content-Type: {}", value),
                None => tracing::error!("No Content-Type specified."),
            }
            return Err(poem::Error::from_string(
                format!("Content-Type must be {APPLICATION_JSON}"),
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ));
        }
    }

    ep.call(req).await.map(IntoResponse::into_response)
}
