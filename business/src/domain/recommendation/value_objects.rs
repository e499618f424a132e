use serde::{Deserialize, Serialize};

/// Maximum number of characters a SKU column can hold.
pub const SKU_MAX_LENGTH: usize = 25;

/// Relationship between the two products of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationType {
    UpSell,
    CrossSell,
    Accessory,
    Bundle,
}

impl RecommendationType {
    pub const ALL: [RecommendationType; 4] = [
        RecommendationType::UpSell,
        RecommendationType::CrossSell,
        RecommendationType::Accessory,
        RecommendationType::Bundle,
    ];

    /// Variant name as stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::UpSell => "UP_SELL",
            RecommendationType::CrossSell => "CROSS_SELL",
            RecommendationType::Accessory => "ACCESSORY",
            RecommendationType::Bundle => "BUNDLE",
        }
    }
}

impl std::fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid value for RecommendationType: {0}")]
pub struct ParseRecommendationTypeError(pub String);

impl std::str::FromStr for RecommendationType {
    type Err = ParseRecommendationTypeError;

    /// Case-insensitive lookup against the variant names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UP_SELL" => Ok(RecommendationType::UpSell),
            "CROSS_SELL" => Ok(RecommendationType::CrossSell),
            "ACCESSORY" => Ok(RecommendationType::Accessory),
            "BUNDLE" => Ok(RecommendationType::Bundle),
            _ => Err(ParseRecommendationTypeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_every_variant_from_its_name() {
        for variant in RecommendationType::ALL {
            assert_eq!(variant.as_str().parse::<RecommendationType>(), Ok(variant));
        }
    }

    #[test]
    fn should_parse_ignoring_case() {
        assert_eq!(
            "up_sell".parse::<RecommendationType>(),
            Ok(RecommendationType::UpSell)
        );
        assert_eq!(
            "Cross_Sell".parse::<RecommendationType>(),
            Ok(RecommendationType::CrossSell)
        );
    }

    #[test]
    fn should_reject_unknown_variant() {
        let err = "InvalidType".parse::<RecommendationType>().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid value for RecommendationType: InvalidType"
        );
    }

    #[test]
    fn should_reject_empty_string() {
        assert!("".parse::<RecommendationType>().is_err());
    }

    #[test]
    fn should_display_variant_name() {
        assert_eq!(RecommendationType::Accessory.to_string(), "ACCESSORY");
        assert_eq!(RecommendationType::Bundle.to_string(), "BUNDLE");
    }
}
