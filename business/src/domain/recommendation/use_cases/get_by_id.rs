use async_trait::async_trait;

use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::Recommendation;

pub struct GetRecommendationParams {
    pub id: i32,
}

#[async_trait]
pub trait GetRecommendationUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetRecommendationParams,
    ) -> Result<Recommendation, RecommendationError>;
}
