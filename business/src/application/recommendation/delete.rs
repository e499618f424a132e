use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::repository::RecommendationRepository;
use crate::domain::recommendation::use_cases::delete::{
    DeleteRecommendationParams, DeleteRecommendationUseCase,
};

pub struct DeleteRecommendationUseCaseImpl {
    pub repository: Arc<dyn RecommendationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteRecommendationUseCase for DeleteRecommendationUseCaseImpl {
    /// Idempotent: deleting an unknown id succeeds without touching the store.
    async fn execute(&self, params: DeleteRecommendationParams) -> Result<(), RecommendationError> {
        self.logger
            .info(&format!("Deleting recommendation with id: {}", params.id));

        let existing = match self.repository.find(params.id).await {
            Ok(recommendation) => recommendation,
            Err(RepositoryError::NotFound) => {
                self.logger.debug(&format!(
                    "Recommendation with id: {} does not exist, nothing to delete",
                    params.id
                ));
                return Ok(());
            }
            Err(other) => return Err(RecommendationError::Repository(other)),
        };

        self.repository.delete(params.id).await.map_err(|e| {
            self.logger
                .error(&format!("Error deleting record {}: {}", existing.name(), e));
            RecommendationError::write_failed("deleting", e)
        })?;

        self.logger
            .info(&format!("Recommendation with id: {} was deleted", params.id));
        Ok(())
    }
}
