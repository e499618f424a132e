use async_trait::async_trait;

use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::Recommendation;

pub struct LikeRecommendationParams {
    pub id: i32,
}

#[async_trait]
pub trait LikeRecommendationUseCase: Send + Sync {
    async fn add(
        &self,
        params: LikeRecommendationParams,
    ) -> Result<Recommendation, RecommendationError>;
    async fn remove(
        &self,
        params: LikeRecommendationParams,
    ) -> Result<Recommendation, RecommendationError>;
}
