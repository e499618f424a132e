use rand::Rng;
use rand::distr::Alphanumeric;
use rand::seq::IndexedRandom;
use serde_json::Value;

use crate::domain::recommendation::model::Recommendation;
use crate::domain::recommendation::value_objects::RecommendationType;

const SKU_LENGTH: usize = 20;

/// Builds random, valid recommendations for tests.
pub struct RecommendationFactory;

impl RecommendationFactory {
    /// A fresh record without an id.
    pub fn build() -> Recommendation {
        let mut rng = rand::rng();
        let recommendation_type = *RecommendationType::ALL
            .choose(&mut rng)
            .unwrap_or(&RecommendationType::UpSell);

        Recommendation {
            id: None,
            product_a_sku: random_sku(&mut rng),
            product_b_sku: random_sku(&mut rng),
            recommendation_type,
            likes: rng.random_range(0..1_000),
        }
    }

    pub fn build_with_id(id: i32) -> Recommendation {
        Recommendation {
            id: Some(id),
            ..Self::build()
        }
    }

    /// `count` records, each with a distinct SKU pair.
    pub fn build_batch(count: usize) -> Vec<Recommendation> {
        (0..count).map(|_| Self::build()).collect()
    }

    /// Request body for a fresh record.
    pub fn payload() -> Value {
        let mut payload = Self::build().serialize();
        if let Some(fields) = payload.as_object_mut() {
            fields.remove("id");
        }
        payload
    }
}

fn random_sku(rng: &mut impl Rng) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(SKU_LENGTH)
        .map(char::from)
        .collect()
}
