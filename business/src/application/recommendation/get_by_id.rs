use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::Recommendation;
use crate::domain::recommendation::repository::RecommendationRepository;
use crate::domain::recommendation::use_cases::get_by_id::{
    GetRecommendationParams, GetRecommendationUseCase,
};

pub struct GetRecommendationUseCaseImpl {
    pub repository: Arc<dyn RecommendationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecommendationUseCase for GetRecommendationUseCaseImpl {
    async fn execute(
        &self,
        params: GetRecommendationParams,
    ) -> Result<Recommendation, RecommendationError> {
        self.logger
            .info(&format!("Processing lookup for id {}", params.id));

        let recommendation = self
            .repository
            .find(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecommendationError::NotFound(params.id),
                other => RecommendationError::Repository(other),
            })?;

        Ok(recommendation)
    }
}
