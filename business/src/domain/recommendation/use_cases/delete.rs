use async_trait::async_trait;

use crate::domain::recommendation::errors::RecommendationError;

pub struct DeleteRecommendationParams {
    pub id: i32,
}

#[async_trait]
pub trait DeleteRecommendationUseCase: Send + Sync {
    async fn execute(&self, params: DeleteRecommendationParams) -> Result<(), RecommendationError>;
}
