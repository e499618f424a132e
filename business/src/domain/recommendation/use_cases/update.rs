use async_trait::async_trait;
use serde_json::Value;

use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::Recommendation;

pub struct UpdateRecommendationParams {
    pub id: i32,
    pub payload: Value,
}

#[async_trait]
pub trait UpdateRecommendationUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateRecommendationParams,
    ) -> Result<Recommendation, RecommendationError>;
}
