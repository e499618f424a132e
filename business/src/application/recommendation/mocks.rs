use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recommendation::model::Recommendation;
use crate::domain::recommendation::repository::RecommendationRepository;
use crate::domain::recommendation::value_objects::RecommendationType;

mock! {
    pub RecommendationRepo {}

    #[async_trait]
    impl RecommendationRepository for RecommendationRepo {
        async fn all(&self) -> Result<Vec<Recommendation>, RepositoryError>;
        async fn find(&self, id: i32) -> Result<Recommendation, RepositoryError>;
        async fn find_by_name(&self, name: &str) -> Result<Vec<Recommendation>, RepositoryError>;
        async fn find_by_product_a_sku(&self, sku: &str) -> Result<Vec<Recommendation>, RepositoryError>;
        async fn find_by_product_b_sku(&self, sku: &str) -> Result<Vec<Recommendation>, RepositoryError>;
        async fn find_by_type(&self, recommendation_type: RecommendationType) -> Result<Vec<Recommendation>, RepositoryError>;
        async fn find_by_product_a_sku_and_type(&self, sku: &str, recommendation_type: RecommendationType) -> Result<Vec<Recommendation>, RepositoryError>;
        async fn find_duplicate(&self, product_a_sku: &str, product_b_sku: &str, recommendation_type: RecommendationType) -> Result<Option<Recommendation>, RepositoryError>;
        async fn create(&self, recommendation: &Recommendation) -> Result<i32, RepositoryError>;
        async fn update(&self, id: i32, recommendation: &Recommendation) -> Result<(), RepositoryError>;
        async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn stored(id: i32, likes: i32) -> Recommendation {
    Recommendation::from_repository(
        id,
        "SKU-A".to_string(),
        "SKU-B".to_string(),
        RecommendationType::UpSell,
        likes,
    )
}
