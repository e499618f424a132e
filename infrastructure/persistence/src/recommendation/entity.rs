use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::recommendation::model::Recommendation;
use business::domain::recommendation::value_objects::RecommendationType;

#[derive(Debug, FromRow)]
pub struct RecommendationEntity {
    pub id: i32,
    pub product_a_sku: String,
    pub product_b_sku: String,
    pub recommendation_type: String,
    pub likes: i32,
}

impl RecommendationEntity {
    pub fn into_domain(self) -> Result<Recommendation, RepositoryError> {
        let recommendation_type = self
            .recommendation_type
            .parse::<RecommendationType>()
            .map_err(|e| {
                tracing::error!("Corrupt row id={}: {}", self.id, e);
                RepositoryError::DatabaseError
            })?;

        Ok(Recommendation::from_repository(
            self.id,
            self.product_a_sku,
            self.product_b_sku,
            recommendation_type,
            self.likes,
        ))
    }
}

pub fn into_domain_all(
    entities: Vec<RecommendationEntity>,
) -> Result<Vec<Recommendation>, RepositoryError> {
    entities.into_iter().map(|e| e.into_domain()).collect()
}
