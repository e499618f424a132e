use async_trait::async_trait;
use serde_json::Value;

use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::Recommendation;

pub struct CreateRecommendationParams {
    /// Untyped request body, validated by `Recommendation::deserialize`.
    pub payload: Value,
}

#[async_trait]
pub trait CreateRecommendationUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CreateRecommendationParams,
    ) -> Result<Recommendation, RecommendationError>;
}
