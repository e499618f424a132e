use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::Recommendation;
use crate::domain::recommendation::repository::RecommendationRepository;
use crate::domain::recommendation::use_cases::update::{
    UpdateRecommendationParams, UpdateRecommendationUseCase,
};

pub struct UpdateRecommendationUseCaseImpl {
    pub repository: Arc<dyn RecommendationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateRecommendationUseCase for UpdateRecommendationUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateRecommendationParams,
    ) -> Result<Recommendation, RecommendationError> {
        self.logger
            .info(&format!("Updating recommendation with id: {}", params.id));

        // Verify it exists
        self.repository
            .find(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecommendationError::NotFound(params.id),
                other => RecommendationError::Repository(other),
            })?;

        // Full replace; the path id always wins over the body
        let mut updated = Recommendation::deserialize(&params.payload)?;
        updated.id = Some(params.id);
        let id = updated.ensure_updatable()?;

        self.logger.info(&format!("Saving {}", updated.name()));
        self.repository
            .update(id, &updated)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Error updating record {}: {}", updated.name(), e));
                RecommendationError::write_failed("updating", e)
            })?;

        self.logger
            .info(&format!("Recommendation with id: {} updated", id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::recommendation::mocks::{
        MockRecommendationRepo, mock_logger, stored,
    };
    use crate::domain::recommendation::value_objects::RecommendationType;
    use serde_json::json;

    #[tokio::test]
    async fn should_replace_all_fields() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo.expect_find().returning(|id| Ok(stored(id, 8)));
        mock_repo
            .expect_update()
            .withf(|id, recommendation| *id == 5 && recommendation.id == Some(5))
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = UpdateRecommendationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateRecommendationParams {
                id: 5,
                payload: json!({
                    "id": 999,
                    "product_a_sku": "unknown",
                    "product_b_sku": "SKU-B",
                    "recommendation_type": "accessory",
                }),
            })
            .await;

        assert!(result.is_ok());
        let updated = result.unwrap();
        assert_eq!(updated.id, Some(5));
        assert_eq!(updated.product_a_sku, "unknown");
        assert_eq!(updated.recommendation_type, RecommendationType::Accessory);
        assert_eq!(updated.likes, 0);
    }

    #[tokio::test]
    async fn should_return_not_found_when_recommendation_does_not_exist() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo
            .expect_find()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_update().never();

        let use_case = UpdateRecommendationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateRecommendationParams {
                id: 404,
                payload: json!({}),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::NotFound(404)
        ));
    }

    #[tokio::test]
    async fn should_reject_invalid_payload() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo.expect_find().returning(|id| Ok(stored(id, 0)));
        mock_repo.expect_update().never();

        let use_case = UpdateRecommendationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateRecommendationParams {
                id: 1,
                payload: json!({
                    "product_a_sku": "A",
                    "product_b_sku": "B",
                    "recommendation_type": "UP_SELL",
                    "likes": -4,
                }),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn should_wrap_store_failure_as_validation_error() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo.expect_find().returning(|id| Ok(stored(id, 0)));
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::Persistence));

        let use_case = UpdateRecommendationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateRecommendationParams {
                id: 1,
                payload: json!({
                    "product_a_sku": "A",
                    "product_b_sku": "B",
                    "recommendation_type": "BUNDLE",
                }),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::Validation(_)
        ));
    }
}
