use super::value_objects::ParseRecommendationTypeError;

#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    /// Bad, missing or malformed input, negative likes, or a failed write.
    #[error("{0}")]
    Validation(String),
    #[error("{field} exceeds limit of {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
    #[error(transparent)]
    InvalidType(#[from] ParseRecommendationTypeError),
    #[error("Recommendation with id '{0}' was not found.")]
    NotFound(i32),
    #[error("Recommendation already exists")]
    Duplicate,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl RecommendationError {
    pub fn validation(message: impl Into<String>) -> Self {
        RecommendationError::Validation(message.into())
    }

    /// Writes surface store failures as validation errors once rolled back.
    pub fn write_failed(action: &str, source: crate::domain::errors::RepositoryError) -> Self {
        RecommendationError::Validation(format!("Error {action} recommendation: {source}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;

    #[test]
    fn should_show_wrapped_store_error_code() {
        let error = RecommendationError::from(RepositoryError::DatabaseError);

        assert_eq!(error.to_string(), "repository.database_error");
    }

    #[test]
    fn should_describe_failed_write() {
        let error = RecommendationError::write_failed("creating", RepositoryError::Duplicated);

        assert_eq!(
            error.to_string(),
            "Error creating recommendation: repository.duplicated"
        );
    }
}
