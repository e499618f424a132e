use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::recommendation::model::Recommendation;
use business::domain::recommendation::value_objects::RecommendationType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
pub enum RecommendationTypeDto {
    #[oai(rename = "UP_SELL")]
    UpSell,
    #[oai(rename = "CROSS_SELL")]
    CrossSell,
    #[oai(rename = "ACCESSORY")]
    Accessory,
    #[oai(rename = "BUNDLE")]
    Bundle,
}

impl From<RecommendationType> for RecommendationTypeDto {
    fn from(recommendation_type: RecommendationType) -> Self {
        match recommendation_type {
            RecommendationType::UpSell => RecommendationTypeDto::UpSell,
            RecommendationType::CrossSell => RecommendationTypeDto::CrossSell,
            RecommendationType::Accessory => RecommendationTypeDto::Accessory,
            RecommendationType::Bundle => RecommendationTypeDto::Bundle,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecommendationResponse {
    /// Identifier assigned by the store
    pub id: i32,
    pub product_a_sku: String,
    pub product_b_sku: String,
    pub recommendation_type: RecommendationTypeDto,
    pub likes: i32,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            id: recommendation.id.unwrap_or_default(),
            product_a_sku: recommendation.product_a_sku,
            product_b_sku: recommendation.product_b_sku,
            recommendation_type: recommendation.recommendation_type.into(),
            likes: recommendation.likes,
        }
    }
}
