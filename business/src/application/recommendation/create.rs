use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::Recommendation;
use crate::domain::recommendation::repository::RecommendationRepository;
use crate::domain::recommendation::use_cases::create::{
    CreateRecommendationParams, CreateRecommendationUseCase,
};

pub struct CreateRecommendationUseCaseImpl {
    pub repository: Arc<dyn RecommendationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateRecommendationUseCase for CreateRecommendationUseCaseImpl {
    async fn execute(
        &self,
        params: CreateRecommendationParams,
    ) -> Result<Recommendation, RecommendationError> {
        self.logger
            .debug(&format!("Processing: {}", params.payload));

        let mut recommendation = Recommendation::deserialize(&params.payload)?;

        // Reject the triple before hitting the unique constraint
        if self
            .repository
            .find_duplicate(
                &recommendation.product_a_sku,
                &recommendation.product_b_sku,
                recommendation.recommendation_type,
            )
            .await?
            .is_some()
        {
            self.logger.warn(&format!(
                "Duplicate recommendation found: {} ({})",
                recommendation.name(),
                recommendation.recommendation_type
            ));
            return Err(RecommendationError::Duplicate);
        }

        recommendation.prepare_create()?;
        self.logger
            .info(&format!("Creating {}", recommendation.name()));

        let id = self
            .repository
            .create(&recommendation)
            .await
            .map_err(|e| {
                self.logger.error(&format!(
                    "Error creating record {}: {}",
                    recommendation.name(),
                    e
                ));
                RecommendationError::write_failed("creating", e)
            })?;
        recommendation.id = Some(id);

        self.logger
            .info(&format!("Recommendation with new id [{}] saved", id));
        Ok(recommendation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::recommendation::mocks::{
        MockRecommendationRepo, mock_logger, stored,
    };
    use crate::domain::errors::RepositoryError;
    use crate::domain::recommendation::value_objects::RecommendationType;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "product_a_sku": "AA0001",
            "product_b_sku": "AA0002",
            "recommendation_type": "UP_SELL",
            "likes": 0,
        })
    }

    #[tokio::test]
    async fn should_create_recommendation_when_valid() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo.expect_find_duplicate().returning(|_, _, _| Ok(None));
        mock_repo.expect_create().times(1).returning(|_| Ok(17));

        let use_case = CreateRecommendationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateRecommendationParams { payload: payload() })
            .await;

        assert!(result.is_ok());
        let recommendation = result.unwrap();
        assert_eq!(recommendation.id, Some(17));
        assert_eq!(recommendation.product_a_sku, "AA0001");
        assert_eq!(recommendation.recommendation_type, RecommendationType::UpSell);
        assert_eq!(recommendation.likes, 0);
    }

    #[tokio::test]
    async fn should_reject_duplicate_triple() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo
            .expect_find_duplicate()
            .returning(|_, _, _| Ok(Some(stored(1, 0))));
        mock_repo.expect_create().never();

        let use_case = CreateRecommendationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateRecommendationParams { payload: payload() })
            .await;

        assert!(matches!(result.unwrap_err(), RecommendationError::Duplicate));
    }

    #[tokio::test]
    async fn should_reject_invalid_payload_before_touching_store() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo.expect_find_duplicate().never();
        mock_repo.expect_create().never();

        let use_case = CreateRecommendationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateRecommendationParams {
                payload: json!({ "product_a_sku": "123" }),
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
        mock_repo.expect_find_duplicate().returning(|_, _, _| Ok(None));
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateRecommendationUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateRecommendationParams { payload: payload() })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::Validation(_)
        ));
    }
}
