use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recommendation::errors::RecommendationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecommendationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            RecommendationError::Validation(_)
            | RecommendationError::FieldTooLong { .. }
            | RecommendationError::InvalidType(_) => StatusCode::BAD_REQUEST,
            RecommendationError::NotFound(_) => StatusCode::NOT_FOUND,
            RecommendationError::Duplicate => StatusCode::CONFLICT,
            RecommendationError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(status, self.to_string())))
    }
}
