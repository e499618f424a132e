use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::Recommendation;
use crate::domain::recommendation::repository::RecommendationRepository;
use crate::domain::recommendation::use_cases::like::{
    LikeRecommendationParams, LikeRecommendationUseCase,
};

/// Like counter updates.
///
/// The counter is read, changed in memory and written back, so two concurrent
/// requests on the same record can lose an update.
pub struct LikeRecommendationUseCaseImpl {
    pub repository: Arc<dyn RecommendationRepository>,
    pub logger: Arc<dyn Logger>,
}

impl LikeRecommendationUseCaseImpl {
    async fn load(&self, id: i32) -> Result<Recommendation, RecommendationError> {
        self.repository.find(id).await.map_err(|e| match e {
            RepositoryError::NotFound => RecommendationError::NotFound(id),
            other => RecommendationError::Repository(other),
        })
    }

    async fn save(&self, recommendation: &Recommendation) -> Result<(), RecommendationError> {
        let id = recommendation.ensure_updatable()?;
        self.repository
            .update(id, recommendation)
            .await
            .map_err(|e| {
                self.logger.error(&format!(
                    "Error updating record {}: {}",
                    recommendation.name(),
                    e
                ));
                RecommendationError::write_failed("updating", e)
            })
    }
}

#[async_trait]
impl LikeRecommendationUseCase for LikeRecommendationUseCaseImpl {
    async fn add(
        &self,
        params: LikeRecommendationParams,
    ) -> Result<Recommendation, RecommendationError> {
        let mut recommendation = self.load(params.id).await?;
        self.logger
            .info(&format!("Adding like for {}", recommendation.name()));

        recommendation.add_like()?;
        self.save(&recommendation).await?;

        self.logger.info(&format!(
            "Recommendation with id: {} - likes incremented to {}",
            params.id, recommendation.likes
        ));
        Ok(recommendation)
    }

    async fn remove(
        &self,
        params: LikeRecommendationParams,
    ) -> Result<Recommendation, RecommendationError> {
        let mut recommendation = self.load(params.id).await?;
        self.logger
            .info(&format!("Decrementing like for {}", recommendation.name()));

        recommendation.remove_like()?;
        self.save(&recommendation).await?;

        self.logger.info(&format!(
            "Recommendation with id: {} - likes decremented to {}",
            params.id, recommendation.likes
        ));
        Ok(recommendation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::recommendation::mocks::{
        MockRecommendationRepo, mock_logger, stored,
    };

    #[tokio::test]
    async fn should_increment_and_persist_likes() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo.expect_find().returning(|id| Ok(stored(id, 9)));
        mock_repo
            .expect_update()
            .withf(|id, recommendation| *id == 2 && recommendation.likes == 10)
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = LikeRecommendationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.add(LikeRecommendationParams { id: 2 }).await;

        assert_eq!(result.unwrap().likes, 10);
    }

    #[tokio::test]
    async fn should_decrement_and_persist_likes() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo.expect_find().returning(|id| Ok(stored(id, 1)));
        mock_repo
            .expect_update()
            .withf(|_, recommendation| recommendation.likes == 0)
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = LikeRecommendationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.remove(LikeRecommendationParams { id: 2 }).await;

        assert_eq!(result.unwrap().likes, 0);
    }

    #[tokio::test]
    async fn should_refuse_to_decrement_below_zero() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo.expect_find().returning(|id| Ok(stored(id, 0)));
        mock_repo.expect_update().never();

        let use_case = LikeRecommendationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.remove(LikeRecommendationParams { id: 2 }).await;

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo
            .expect_find()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = LikeRecommendationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let added = use_case.add(LikeRecommendationParams { id: 77 }).await;
        let removed = use_case.remove(LikeRecommendationParams { id: 77 }).await;

        assert!(matches!(
            added.unwrap_err(),
            RecommendationError::NotFound(77)
        ));
        assert!(matches!(
            removed.unwrap_err(),
            RecommendationError::NotFound(77)
        ));
    }
}
