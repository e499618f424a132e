use async_trait::async_trait;

use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::Recommendation;

/// Optional listing filters. With none set every record is returned.
#[derive(Debug, Default, Clone)]
pub struct ListRecommendationsParams {
    pub product_a_sku: Option<String>,
    pub product_b_sku: Option<String>,
    pub name: Option<String>,
    /// Variant name, matched case-insensitively.
    pub recommendation_type: Option<String>,
}

#[async_trait]
pub trait ListRecommendationsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListRecommendationsParams,
    ) -> Result<Vec<Recommendation>, RecommendationError>;
}
