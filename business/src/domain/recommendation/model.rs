use serde_json::{Map, Value, json};

use super::errors::RecommendationError;
use super::value_objects::{ParseRecommendationTypeError, RecommendationType, SKU_MAX_LENGTH};

/// A directed pairing of two product SKUs with a relationship type and a like counter.
///
/// `id` is `None` until the record has been inserted; the store assigns it once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub id: Option<i32>,
    pub product_a_sku: String,
    pub product_b_sku: String,
    pub recommendation_type: RecommendationType,
    pub likes: i32,
}

impl Recommendation {
    /// Builds a record from an untyped JSON object, validating every field.
    ///
    /// `likes` defaults to 0 when absent or null. The returned record never has an id.
    pub fn deserialize(data: &Value) -> Result<Self, RecommendationError> {
        let fields = data.as_object().ok_or_else(|| {
            RecommendationError::validation(
                "Invalid Recommendation: body of request contained bad or no data",
            )
        })?;

        Ok(Self {
            id: None,
            product_a_sku: validate_sku(fields, "product_a_sku")?,
            product_b_sku: validate_sku(fields, "product_b_sku")?,
            recommendation_type: validate_type(fields)?,
            likes: validate_likes(fields)?,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i32,
        product_a_sku: String,
        product_b_sku: String,
        recommendation_type: RecommendationType,
        likes: i32,
    ) -> Self {
        Self {
            id: Some(id),
            product_a_sku,
            product_b_sku,
            recommendation_type,
            likes,
        }
    }

    /// Display name, `"{product_a_sku}-{product_b_sku}"`.
    pub fn name(&self) -> String {
        format!("{}-{}", self.product_a_sku, self.product_b_sku)
    }

    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "product_a_sku": self.product_a_sku,
            "product_b_sku": self.product_b_sku,
            "recommendation_type": self.recommendation_type.as_str(),
            "likes": self.likes,
        })
    }

    /// Readies the record for insertion: any preset id is discarded.
    pub fn prepare_create(&mut self) -> Result<(), RecommendationError> {
        self.id = None;
        self.check_likes()
    }

    /// Returns the id to write to, refusing records that were never persisted.
    pub fn ensure_updatable(&self) -> Result<i32, RecommendationError> {
        let id = self
            .id
            .ok_or_else(|| RecommendationError::validation("Update called with empty ID field"))?;
        self.check_likes()?;
        Ok(id)
    }

    pub fn add_like(&mut self) -> Result<(), RecommendationError> {
        self.likes = self
            .likes
            .checked_add(1)
            .ok_or_else(|| RecommendationError::validation("Likes cannot exceed maximum value"))?;
        Ok(())
    }

    /// Fails without touching the counter when it is already at zero.
    pub fn remove_like(&mut self) -> Result<(), RecommendationError> {
        if self.likes <= 0 {
            return Err(RecommendationError::validation("Likes cannot be negative"));
        }
        self.likes -= 1;
        Ok(())
    }

    fn check_likes(&self) -> Result<(), RecommendationError> {
        if self.likes < 0 {
            return Err(RecommendationError::validation(format!(
                "Likes cannot be negative: {}",
                self.likes
            )));
        }
        Ok(())
    }
}

fn validate_sku(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<String, RecommendationError> {
    let value = match fields.get(field) {
        None | Some(Value::Null) => {
            return Err(RecommendationError::validation(format!(
                "{field} is required and cannot be empty"
            )));
        }
        Some(Value::String(value)) => value,
        Some(other) => {
            return Err(RecommendationError::validation(format!(
                "Invalid type for string [{field}]: {other}"
            )));
        }
    };

    if value.is_empty() {
        return Err(RecommendationError::validation(format!(
            "{field} is required and cannot be empty"
        )));
    }
    if value.chars().count() > SKU_MAX_LENGTH {
        return Err(RecommendationError::FieldTooLong {
            field,
            max: SKU_MAX_LENGTH,
        });
    }
    Ok(value.clone())
}

fn validate_type(fields: &Map<String, Value>) -> Result<RecommendationType, RecommendationError> {
    match fields.get("recommendation_type") {
        Some(Value::String(value)) => Ok(value.parse()?),
        Some(other) => Err(ParseRecommendationTypeError(other.to_string()).into()),
        None => Err(ParseRecommendationTypeError("null".to_string()).into()),
    }
}

fn validate_likes(fields: &Map<String, Value>) -> Result<i32, RecommendationError> {
    let value = match fields.get("likes") {
        None | Some(Value::Null) => return Ok(0),
        Some(value) => value,
    };

    let likes = value.as_i64().ok_or_else(|| {
        RecommendationError::validation(format!("Invalid type for integer [likes]: {value}"))
    })?;
    if likes < 0 {
        return Err(RecommendationError::validation(format!(
            "Likes cannot be negative: {likes}"
        )));
    }
    i32::try_from(likes).map_err(|_| {
        RecommendationError::validation(format!("Invalid likes value: {likes}"))
    })
}
