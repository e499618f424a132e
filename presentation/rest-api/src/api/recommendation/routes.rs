use std::num::IntErrorKind;
use std::sync::Arc;

use poem::Request;
use poem::http::StatusCode;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use serde_json::Value;

use business::domain::recommendation::errors::RecommendationError;
use business::domain::recommendation::model::Recommendation;
use business::domain::recommendation::use_cases::create::{
    CreateRecommendationParams, CreateRecommendationUseCase,
};
use business::domain::recommendation::use_cases::delete::{
    DeleteRecommendationParams, DeleteRecommendationUseCase,
};
use business::domain::recommendation::use_cases::get_by_id::{
    GetRecommendationParams, GetRecommendationUseCase,
};
use business::domain::recommendation::use_cases::like::{
    LikeRecommendationParams, LikeRecommendationUseCase,
};
use business::domain::recommendation::use_cases::list::{
    ListRecommendationsParams, ListRecommendationsUseCase,
};
use business::domain::recommendation::use_cases::update::{
    UpdateRecommendationParams, UpdateRecommendationUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recommendation::dto::RecommendationResponse;
use crate::api::tags::ApiTags;

pub struct RecommendationApi {
    create_use_case: Arc<dyn CreateRecommendationUseCase>,
    list_use_case: Arc<dyn ListRecommendationsUseCase>,
    get_use_case: Arc<dyn GetRecommendationUseCase>,
    update_use_case: Arc<dyn UpdateRecommendationUseCase>,
    delete_use_case: Arc<dyn DeleteRecommendationUseCase>,
    like_use_case: Arc<dyn LikeRecommendationUseCase>,
}

impl RecommendationApi {
    pub fn new(
        create_use_case: Arc<dyn CreateRecommendationUseCase>,
        list_use_case: Arc<dyn ListRecommendationsUseCase>,
        get_use_case: Arc<dyn GetRecommendationUseCase>,
        update_use_case: Arc<dyn UpdateRecommendationUseCase>,
        delete_use_case: Arc<dyn DeleteRecommendationUseCase>,
        like_use_case: Arc<dyn LikeRecommendationUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            list_use_case,
            get_use_case,
            update_use_case,
            delete_use_case,
            like_use_case,
        }
    }
}

/// Parses a path id. A well-formed integer outside the `i32` range can never
/// name a stored record, so it comes back as `Ok(None)`.
fn parse_id(raw: &str) -> Result<Option<i32>, Json<ErrorResponse>> {
    match raw.parse::<i32>() {
        Ok(id) => Ok(Some(id)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(_) => Err(Json(ErrorResponse::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid recommendation id: {raw}"),
        ))),
    }
}

fn unknown_id(raw: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        StatusCode::NOT_FOUND,
        format!("Recommendation with id '{raw}' was not found."),
    ))
}

/// Absolute URL of a record, built from the request's `Host` header when present.
fn location_of(req: &Request, id: i32) -> String {
    match req.header("host") {
        Some(host) => format!("http://{host}/recommendations/{id}"),
        None => format!("/recommendations/{id}"),
    }
}

/// Recommendation management API
///
/// Endpoints for creating, reading, updating, deleting and liking
/// product recommendations.
#[OpenApi]
impl RecommendationApi {
    /// Create a recommendation
    ///
    /// Validates the posted record and stores it. A record with the same
    /// SKU pair and type is rejected with 409.
    #[oai(
        path = "/recommendations",
        method = "post",
        tag = "ApiTags::Recommendations"
    )]
    async fn create_recommendation(
        &self,
        req: &Request,
        body: Json<Value>,
    ) -> CreateRecommendationResponse {
        tracing::info!("Request to Create a Recommendation...");

        match self
            .create_use_case
            .execute(CreateRecommendationParams { payload: body.0 })
            .await
        {
            Ok(recommendation) => {
                let response = RecommendationResponse::from(recommendation);
                let location = location_of(req, response.id);
                CreateRecommendationResponse::Created(Json(response), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateRecommendationResponse::BadRequest(json),
                    409 => CreateRecommendationResponse::Conflict(json),
                    _ => CreateRecommendationResponse::InternalError(json),
                }
            }
        }
    }

    /// List recommendations
    ///
    /// Filters compose as follows: `product_a_sku` with `recommendation_type`
    /// (ordered by likes, most liked first), then `product_a_sku`,
    /// `recommendation_type`, `product_b_sku` and `name` alone. Without
    /// filters every record is returned.
    #[oai(
        path = "/recommendations",
        method = "get",
        tag = "ApiTags::Recommendations"
    )]
    async fn list_recommendations(
        &self,
        product_a_sku: Query<Option<String>>,
        product_b_sku: Query<Option<String>>,
        name: Query<Option<String>>,
        recommendation_type: Query<Option<String>>,
    ) -> ListRecommendationsResponse {
        tracing::info!("Request for recommendation list");

        let params = ListRecommendationsParams {
            product_a_sku: product_a_sku.0,
            product_b_sku: product_b_sku.0,
            name: name.0,
            recommendation_type: recommendation_type.0,
        };

        match self.list_use_case.execute(params).await {
            Ok(recommendations) => ListRecommendationsResponse::Ok(Json(
                recommendations.into_iter().map(Into::into).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListRecommendationsResponse::BadRequest(json),
                    _ => ListRecommendationsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a recommendation by ID
    #[oai(
        path = "/recommendations/:id",
        method = "get",
        tag = "ApiTags::Recommendations"
    )]
    async fn get_recommendation(&self, id: Path<String>) -> GetRecommendationResponse {
        let id = match parse_id(&id.0) {
            Ok(Some(id)) => id,
            Ok(None) => return GetRecommendationResponse::NotFound(unknown_id(&id.0)),
            Err(json) => return GetRecommendationResponse::BadRequest(json),
        };

        match self
            .get_use_case
            .execute(GetRecommendationParams { id })
            .await
        {
            Ok(recommendation) => GetRecommendationResponse::Ok(Json(recommendation.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRecommendationResponse::NotFound(json),
                    _ => GetRecommendationResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a recommendation
    ///
    /// Every field is taken from the body; the id always comes from the path.
    #[oai(
        path = "/recommendations/:id",
        method = "put",
        tag = "ApiTags::Recommendations"
    )]
    async fn update_recommendation(
        &self,
        id: Path<String>,
        body: Json<Value>,
    ) -> UpdateRecommendationResponse {
        let id = match parse_id(&id.0) {
            Ok(Some(id)) => id,
            Ok(None) => return UpdateRecommendationResponse::NotFound(unknown_id(&id.0)),
            Err(json) => return UpdateRecommendationResponse::BadRequest(json),
        };

        match self
            .update_use_case
            .execute(UpdateRecommendationParams {
                id,
                payload: body.0,
            })
            .await
        {
            Ok(recommendation) => UpdateRecommendationResponse::Ok(Json(recommendation.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateRecommendationResponse::BadRequest(json),
                    404 => UpdateRecommendationResponse::NotFound(json),
                    _ => UpdateRecommendationResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a recommendation
    ///
    /// Responds 204 whether or not the record existed.
    #[oai(
        path = "/recommendations/:id",
        method = "delete",
        tag = "ApiTags::Recommendations"
    )]
    async fn delete_recommendation(&self, id: Path<String>) -> DeleteRecommendationResponse {
        let id = match parse_id(&id.0) {
            Ok(Some(id)) => id,
            Ok(None) => return DeleteRecommendationResponse::NoContent,
            Err(json) => return DeleteRecommendationResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteRecommendationParams { id })
            .await
        {
            Ok(()) => DeleteRecommendationResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteRecommendationResponse::BadRequest(json),
                    _ => DeleteRecommendationResponse::InternalError(json),
                }
            }
        }
    }

    /// Like a recommendation
    #[oai(
        path = "/recommendations/:id/like",
        method = "put",
        tag = "ApiTags::Recommendations"
    )]
    async fn like_recommendation(&self, id: Path<String>) -> LikeRecommendationResponse {
        let id = match parse_id(&id.0) {
            Ok(Some(id)) => id,
            Ok(None) => return LikeRecommendationResponse::NotFound(unknown_id(&id.0)),
            Err(json) => return LikeRecommendationResponse::BadRequest(json),
        };

        let result = self
            .like_use_case
            .add(LikeRecommendationParams { id })
            .await;
        LikeRecommendationResponse::from_result(result)
    }

    /// Remove a like from a recommendation
    ///
    /// Fails with 400 when the record has no likes left.
    #[oai(
        path = "/recommendations/:id/like",
        method = "delete",
        tag = "ApiTags::Recommendations"
    )]
    async fn unlike_recommendation(&self, id: Path<String>) -> LikeRecommendationResponse {
        let id = match parse_id(&id.0) {
            Ok(Some(id)) => id,
            Ok(None) => return LikeRecommendationResponse::NotFound(unknown_id(&id.0)),
            Err(json) => return LikeRecommendationResponse::BadRequest(json),
        };

        let result = self
            .like_use_case
            .remove(LikeRecommendationParams { id })
            .await;
        LikeRecommendationResponse::from_result(result)
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateRecommendationResponse {
    #[oai(status = 201)]
    Created(
        Json<RecommendationResponse>,
        #[oai(header = "Location")] String,
    ),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListRecommendationsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RecommendationResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRecommendationResponse {
    #[oai(status = 200)]
    Ok(Json<RecommendationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateRecommendationResponse {
    #[oai(status = 200)]
    Ok(Json<RecommendationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteRecommendationResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LikeRecommendationResponse {
    #[oai(status = 200)]
    Ok(Json<RecommendationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl LikeRecommendationResponse {
    fn from_result(result: Result<Recommendation, RecommendationError>) -> Self {
        match result {
            Ok(recommendation) => LikeRecommendationResponse::Ok(Json(recommendation.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => LikeRecommendationResponse::BadRequest(json),
                    404 => LikeRecommendationResponse::NotFound(json),
                    _ => LikeRecommendationResponse::InternalError(json),
                }
            }
        }
    }
}
