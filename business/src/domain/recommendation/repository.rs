use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Recommendation;
use super::value_objects::RecommendationType;

/// Storage port for recommendations.
///
/// Every write runs in its own transaction and is rolled back on failure.
/// Queries without an explicit ordering return rows in store-native order.
#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    async fn all(&self) -> Result<Vec<Recommendation>, RepositoryError>;
    /// Fails with `RepositoryError::NotFound` when no row has this id.
    async fn find(&self, id: i32) -> Result<Recommendation, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Vec<Recommendation>, RepositoryError>;
    async fn find_by_product_a_sku(&self, sku: &str)
    -> Result<Vec<Recommendation>, RepositoryError>;
    async fn find_by_product_b_sku(&self, sku: &str)
    -> Result<Vec<Recommendation>, RepositoryError>;
    async fn find_by_type(
        &self,
        recommendation_type: RecommendationType,
    ) -> Result<Vec<Recommendation>, RepositoryError>;
    /// Ordered by likes, highest first.
    async fn find_by_product_a_sku_and_type(
        &self,
        sku: &str,
        recommendation_type: RecommendationType,
    ) -> Result<Vec<Recommendation>, RepositoryError>;
    async fn find_duplicate(
        &self,
        product_a_sku: &str,
        product_b_sku: &str,
        recommendation_type: RecommendationType,
    ) -> Result<Option<Recommendation>, RepositoryError>;
    /// Inserts the record and returns the id assigned by the store.
    async fn create(&self, recommendation: &Recommendation) -> Result<i32, RepositoryError>;
    async fn update(&self, id: i32, recommendation: &Recommendation)
    -> Result<(), RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
