use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::Recommendation;
use crate::domain::recommendation::repository::RecommendationRepository;
use crate::domain::recommendation::use_cases::list::{
    ListRecommendationsParams, ListRecommendationsUseCase,
};
use crate::domain::recommendation::value_objects::RecommendationType;

pub struct ListRecommendationsUseCaseImpl {
    pub repository: Arc<dyn RecommendationRepository>,
    pub logger: Arc<dyn Logger>,
}

/// Empty query values count as absent filters.
fn given(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().filter(|value| !value.is_empty())
}

#[async_trait]
impl ListRecommendationsUseCase for ListRecommendationsUseCaseImpl {
    async fn execute(
        &self,
        params: ListRecommendationsParams,
    ) -> Result<Vec<Recommendation>, RecommendationError> {
        let recommendation_type = given(&params.recommendation_type)
            .map(str::parse::<RecommendationType>)
            .transpose()?;

        let recommendations = match (
            given(&params.product_a_sku),
            recommendation_type,
            given(&params.product_b_sku),
            given(&params.name),
        ) {
            (Some(sku), Some(recommendation_type), _, _) => {
                self.logger.info(&format!(
                    "Processing type query for {} and {}",
                    sku, recommendation_type
                ));
                self.repository
                    .find_by_product_a_sku_and_type(sku, recommendation_type)
                    .await?
            }
            (Some(sku), None, _, _) => {
                self.logger
                    .info(&format!("Processing product a sku query for {}", sku));
                self.repository.find_by_product_a_sku(sku).await?
            }
            (None, Some(recommendation_type), _, _) => {
                self.logger
                    .info(&format!("Processing type query for {}", recommendation_type));
                self.repository.find_by_type(recommendation_type).await?
            }
            (None, None, Some(sku), _) => {
                self.logger
                    .info(&format!("Processing product b sku query for {}", sku));
                self.repository.find_by_product_b_sku(sku).await?
            }
            (None, None, None, Some(name)) => {
                self.logger
                    .info(&format!("Processing name query for {}", name));
                self.repository.find_by_name(name).await?
            }
            (None, None, None, None) => {
                self.logger.info("Processing all recommendations");
                self.repository.all().await?
            }
        };

        self.logger.info(&format!(
            "Returning {} recommendations",
            recommendations.len()
        ));
        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::recommendation::mocks::{
        MockRecommendationRepo, mock_logger, stored,
    };
    use mockall::predicate::eq;

    fn use_case(mock_repo: MockRecommendationRepo) -> ListRecommendationsUseCaseImpl {
        ListRecommendationsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_all_without_filters() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo
            .expect_all()
            .times(1)
            .returning(|| Ok(vec![stored(1, 0), stored(2, 3)]));

        let result = use_case(mock_repo)
            .execute(ListRecommendationsParams::default())
            .await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_filter_by_product_a_sku() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo
            .expect_find_by_product_a_sku()
            .withf(|sku| sku == "SKU1")
            .times(1)
            .returning(|_| Ok(vec![stored(1, 0)]));

        let result = use_case(mock_repo)
            .execute(ListRecommendationsParams {
                product_a_sku: Some("SKU1".to_string()),
                ..Default::default()
            })
            .await;

        assert_eq!(result.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_filter_by_type_case_insensitively() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo
            .expect_find_by_type()
            .with(eq(RecommendationType::CrossSell))
            .times(1)
            .returning(|_| Ok(vec![]));

        let result = use_case(mock_repo)
            .execute(ListRecommendationsParams {
                recommendation_type: Some("cross_sell".to_string()),
                ..Default::default()
            })
            .await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_combine_sku_and_type_filters() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo
            .expect_find_by_product_a_sku_and_type()
            .withf(|sku, recommendation_type| {
                sku == "SKU1" && *recommendation_type == RecommendationType::UpSell
            })
            .times(1)
            .returning(|_, _| Ok(vec![stored(2, 20), stored(1, 10)]));

        let result = use_case(mock_repo)
            .execute(ListRecommendationsParams {
                product_a_sku: Some("SKU1".to_string()),
                recommendation_type: Some("up_sell".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result[0].likes, 20);
        assert_eq!(result[1].likes, 10);
    }

    #[tokio::test]
    async fn should_filter_by_product_b_sku() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo
            .expect_find_by_product_b_sku()
            .withf(|sku| sku == "SKU-B")
            .times(1)
            .returning(|_| Ok(vec![stored(4, 1)]));

        let result = use_case(mock_repo)
            .execute(ListRecommendationsParams {
                product_b_sku: Some("SKU-B".to_string()),
                ..Default::default()
            })
            .await;

        assert_eq!(result.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_filter_by_name() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo
            .expect_find_by_name()
            .withf(|name| name == "SKU-A-SKU-B")
            .times(1)
            .returning(|_| Ok(vec![stored(4, 1)]));

        let result = use_case(mock_repo)
            .execute(ListRecommendationsParams {
                name: Some("SKU-A-SKU-B".to_string()),
                ..Default::default()
            })
            .await;

        assert_eq!(result.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_ignore_empty_filters() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo
            .expect_all()
            .times(1)
            .returning(|| Ok(vec![stored(1, 0)]));

        let result = use_case(mock_repo)
            .execute(ListRecommendationsParams {
                product_a_sku: Some(String::new()),
                product_b_sku: Some(String::new()),
                name: Some(String::new()),
                recommendation_type: Some(String::new()),
            })
            .await;

        assert_eq!(result.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_use_type_filter_when_sku_is_empty() {
        let mut mock_repo = MockRecommendationRepo::new();
        mock_repo
            .expect_find_by_type()
            .with(eq(RecommendationType::Bundle))
            .times(1)
            .returning(|_| Ok(vec![]));

        let result = use_case(mock_repo)
            .execute(ListRecommendationsParams {
                product_a_sku: Some(String::new()),
                recommendation_type: Some("BUNDLE".to_string()),
                ..Default::default()
            })
            .await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_unknown_type_filter() {
        let mock_repo = MockRecommendationRepo::new();

        let result = use_case(mock_repo)
            .execute(ListRecommendationsParams {
                recommendation_type: Some("sideways".to_string()),
                ..Default::default()
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::InvalidType(_)
        ));
    }
}
