use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::recommendation::model::Recommendation;
use crate::domain::recommendation::repository::RecommendationRepository;
use crate::domain::recommendation::value_objects::RecommendationType;

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Recommendation>,
}

impl Table {
    fn conflicts(&self, candidate: &Recommendation, ignore_id: Option<i32>) -> bool {
        self.rows.values().any(|row| {
            row.id != ignore_id
                && row.product_a_sku == candidate.product_a_sku
                && row.product_b_sku == candidate.product_b_sku
                && row.recommendation_type == candidate.recommendation_type
        })
    }

    fn select(&self, predicate: impl Fn(&Recommendation) -> bool) -> Vec<Recommendation> {
        self.rows.values().filter(|row| predicate(row)).cloned().collect()
    }
}

/// Process-local stand-in for the recommendations table.
///
/// Mirrors the store contract: serial ids starting at 1, the unique
/// (product_a_sku, product_b_sku, recommendation_type) constraint, and id order
/// as the native row order.
#[derive(Default)]
pub struct InMemoryRecommendationRepository {
    table: Mutex<Table>,
}

impl InMemoryRecommendationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> Result<MutexGuard<'_, Table>, RepositoryError> {
        self.table.lock().map_err(|_| RepositoryError::DatabaseError)
    }
}

#[async_trait]
impl RecommendationRepository for InMemoryRecommendationRepository {
    async fn all(&self) -> Result<Vec<Recommendation>, RepositoryError> {
        Ok(self.table()?.select(|_| true))
    }

    async fn find(&self, id: i32) -> Result<Recommendation, RepositoryError> {
        self.table()?
            .rows
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Recommendation>, RepositoryError> {
        Ok(self.table()?.select(|row| row.name() == name))
    }

    async fn find_by_product_a_sku(
        &self,
        sku: &str,
    ) -> Result<Vec<Recommendation>, RepositoryError> {
        Ok(self.table()?.select(|row| row.product_a_sku == sku))
    }

    async fn find_by_product_b_sku(
        &self,
        sku: &str,
    ) -> Result<Vec<Recommendation>, RepositoryError> {
        Ok(self.table()?.select(|row| row.product_b_sku == sku))
    }

    async fn find_by_type(
        &self,
        recommendation_type: RecommendationType,
    ) -> Result<Vec<Recommendation>, RepositoryError> {
        Ok(self
            .table()?
            .select(|row| row.recommendation_type == recommendation_type))
    }

    async fn find_by_product_a_sku_and_type(
        &self,
        sku: &str,
        recommendation_type: RecommendationType,
    ) -> Result<Vec<Recommendation>, RepositoryError> {
        let mut rows = self.table()?.select(|row| {
            row.product_a_sku == sku && row.recommendation_type == recommendation_type
        });
        rows.sort_by(|a, b| b.likes.cmp(&a.likes));
        Ok(rows)
    }

    async fn find_duplicate(
        &self,
        product_a_sku: &str,
        product_b_sku: &str,
        recommendation_type: RecommendationType,
    ) -> Result<Option<Recommendation>, RepositoryError> {
        Ok(self
            .table()?
            .select(|row| {
                row.product_a_sku == product_a_sku
                    && row.product_b_sku == product_b_sku
                    && row.recommendation_type == recommendation_type
            })
            .into_iter()
            .next())
    }

    async fn create(&self, recommendation: &Recommendation) -> Result<i32, RepositoryError> {
        let mut table = self.table()?;
        if recommendation.likes < 0 {
            return Err(RepositoryError::Persistence);
        }
        if table.conflicts(recommendation, None) {
            return Err(RepositoryError::Duplicated);
        }

        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(
            id,
            Recommendation {
                id: Some(id),
                ..recommendation.clone()
            },
        );
        Ok(id)
    }

    async fn update(
        &self,
        id: i32,
        recommendation: &Recommendation,
    ) -> Result<(), RepositoryError> {
        let mut table = self.table()?;
        if !table.rows.contains_key(&id) {
            return Err(RepositoryError::NotFound);
        }
        if recommendation.likes < 0 {
            return Err(RepositoryError::Persistence);
        }
        if table.conflicts(recommendation, Some(id)) {
            return Err(RepositoryError::Duplicated);
        }

        table.rows.insert(
            id,
            Recommendation {
                id: Some(id),
                ..recommendation.clone()
            },
        );
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        self.table()?.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::factories::RecommendationFactory;

    #[tokio::test]
    async fn should_assign_sequential_ids() {
        let repository = InMemoryRecommendationRepository::new();

        let first = repository
            .create(&RecommendationFactory::build())
            .await
            .unwrap();
        let second = repository
            .create(&RecommendationFactory::build())
            .await
            .unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(repository.all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_enforce_unique_triple() {
        let repository = InMemoryRecommendationRepository::new();
        let recommendation = RecommendationFactory::build();
        repository.create(&recommendation).await.unwrap();

        let result = repository.create(&recommendation).await;

        assert_eq!(result, Err(RepositoryError::Duplicated));
    }

    #[tokio::test]
    async fn should_not_find_deleted_rows() {
        let repository = InMemoryRecommendationRepository::new();
        let id = repository
            .create(&RecommendationFactory::build())
            .await
            .unwrap();

        repository.delete(id).await.unwrap();

        assert_eq!(repository.find(id).await, Err(RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn should_not_update_missing_row() {
        let repository = InMemoryRecommendationRepository::new();

        let result = repository
            .update(7, &RecommendationFactory::build_with_id(7))
            .await;

        assert_eq!(result, Err(RepositoryError::NotFound));
        assert!(repository.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_order_sku_and_type_matches_by_likes() {
        let repository = InMemoryRecommendationRepository::new();
        for (product_b_sku, likes) in [("B1", 10), ("B2", 20), ("B3", 15)] {
            repository
                .create(&Recommendation {
                    id: None,
                    product_a_sku: "SKU1".to_string(),
                    product_b_sku: product_b_sku.to_string(),
                    recommendation_type: RecommendationType::UpSell,
                    likes,
                })
                .await
                .unwrap();
        }

        let rows = repository
            .find_by_product_a_sku_and_type("SKU1", RecommendationType::UpSell)
            .await
            .unwrap();

        let likes: Vec<i32> = rows.iter().map(|row| row.likes).collect();
        assert_eq!(likes, vec![20, 15, 10]);
    }
}
