use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use business::domain::errors::RepositoryError;
use business::domain::recommendation::model::Recommendation;
use business::domain::recommendation::repository::RecommendationRepository;
use business::domain::recommendation::value_objects::RecommendationType;

use super::entity::{RecommendationEntity, into_domain_all};

pub struct RecommendationRepositoryPostgres {
    pool: PgPool,
}

impl RecommendationRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn begin(&self) -> Result<Transaction<'static, Postgres>, RepositoryError> {
        self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to open transaction: {}", e);
            RepositoryError::DatabaseError
        })
    }
}

async fn commit(tx: Transaction<'_, Postgres>) -> Result<(), RepositoryError> {
    tx.commit().await.map_err(|e| {
        tracing::error!("Failed to commit transaction: {}", e);
        RepositoryError::Persistence
    })
}

async fn rollback(tx: Transaction<'_, Postgres>, error: RepositoryError) -> RepositoryError {
    if let Err(e) = tx.rollback().await {
        tracing::warn!("Failed to roll back transaction: {}", e);
    }
    error
}

/// Maps driver errors raised inside a write transaction.
pub fn map_write_error(error: &sqlx::Error) -> RepositoryError {
    match error {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        _ => RepositoryError::DatabaseError,
    }
}

fn map_read_error(error: sqlx::Error) -> RepositoryError {
    tracing::error!("Query failed: {}", error);
    RepositoryError::DatabaseError
}

#[async_trait]
impl RecommendationRepository for RecommendationRepositoryPostgres {
    async fn all(&self) -> Result<Vec<Recommendation>, RepositoryError> {
        let entities = sqlx::query_as::<_, RecommendationEntity>(
            "SELECT id, product_a_sku, product_b_sku, recommendation_type, likes FROM recommendations",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        into_domain_all(entities)
    }

    async fn find(&self, id: i32) -> Result<Recommendation, RepositoryError> {
        let entity = sqlx::query_as::<_, RecommendationEntity>(
            "SELECT id, product_a_sku, product_b_sku, recommendation_type, likes FROM recommendations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Recommendation>, RepositoryError> {
        let entities = sqlx::query_as::<_, RecommendationEntity>(
            "SELECT id, product_a_sku, product_b_sku, recommendation_type, likes FROM recommendations WHERE product_a_sku || '-' || product_b_sku = $1",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        into_domain_all(entities)
    }

    async fn find_by_product_a_sku(
        &self,
        sku: &str,
    ) -> Result<Vec<Recommendation>, RepositoryError> {
        let entities = sqlx::query_as::<_, RecommendationEntity>(
            "SELECT id, product_a_sku, product_b_sku, recommendation_type, likes FROM recommendations WHERE product_a_sku = $1",
        )
        .bind(sku)
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        into_domain_all(entities)
    }

    async fn find_by_product_b_sku(
        &self,
        sku: &str,
    ) -> Result<Vec<Recommendation>, RepositoryError> {
        let entities = sqlx::query_as::<_, RecommendationEntity>(
            "SELECT id, product_a_sku, product_b_sku, recommendation_type, likes FROM recommendations WHERE product_b_sku = $1",
        )
        .bind(sku)
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        into_domain_all(entities)
    }

    async fn find_by_type(
        &self,
        recommendation_type: RecommendationType,
    ) -> Result<Vec<Recommendation>, RepositoryError> {
        let entities = sqlx::query_as::<_, RecommendationEntity>(
            "SELECT id, product_a_sku, product_b_sku, recommendation_type, likes FROM recommendations WHERE recommendation_type = $1",
        )
        .bind(recommendation_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        into_domain_all(entities)
    }

    async fn find_by_product_a_sku_and_type(
        &self,
        sku: &str,
        recommendation_type: RecommendationType,
    ) -> Result<Vec<Recommendation>, RepositoryError> {
        let entities = sqlx::query_as::<_, RecommendationEntity>(
            "SELECT id, product_a_sku, product_b_sku, recommendation_type, likes FROM recommendations WHERE product_a_sku = $1 AND recommendation_type = $2 ORDER BY likes DESC",
        )
        .bind(sku)
        .bind(recommendation_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        into_domain_all(entities)
    }

    async fn find_duplicate(
        &self,
        product_a_sku: &str,
        product_b_sku: &str,
        recommendation_type: RecommendationType,
    ) -> Result<Option<Recommendation>, RepositoryError> {
        sqlx::query_as::<_, RecommendationEntity>(
            "SELECT id, product_a_sku, product_b_sku, recommendation_type, likes FROM recommendations WHERE product_a_sku = $1 AND product_b_sku = $2 AND recommendation_type = $3 LIMIT 1",
        )
        .bind(product_a_sku)
        .bind(product_b_sku)
        .bind(recommendation_type.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?
        .map(RecommendationEntity::into_domain)
        .transpose()
    }

    async fn create(&self, recommendation: &Recommendation) -> Result<i32, RepositoryError> {
        let mut tx = self.begin().await?;

        let inserted = sqlx::query_scalar::<_, i32>(
            r#"INSERT INTO recommendations (product_a_sku, product_b_sku, recommendation_type, likes)
            VALUES ($1, $2, $3, $4)
            RETURNING id"#,
        )
        .bind(&recommendation.product_a_sku)
        .bind(&recommendation.product_b_sku)
        .bind(recommendation.recommendation_type.as_str())
        .bind(recommendation.likes)
        .fetch_one(&mut *tx)
        .await;

        match inserted {
            Ok(id) => {
                commit(tx).await?;
                Ok(id)
            }
            Err(e) => {
                tracing::error!("Error creating record {}: {}", recommendation.name(), e);
                Err(rollback(tx, map_write_error(&e)).await)
            }
        }
    }

    async fn update(
        &self,
        id: i32,
        recommendation: &Recommendation,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.begin().await?;

        let updated = sqlx::query(
            r#"UPDATE recommendations SET
                product_a_sku = $2,
                product_b_sku = $3,
                recommendation_type = $4,
                likes = $5
            WHERE id = $1"#,
        )
        .bind(id)
        .bind(&recommendation.product_a_sku)
        .bind(&recommendation.product_b_sku)
        .bind(recommendation.recommendation_type.as_str())
        .bind(recommendation.likes)
        .execute(&mut *tx)
        .await;

        match updated {
            Ok(result) if result.rows_affected() == 0 => {
                Err(rollback(tx, RepositoryError::NotFound).await)
            }
            Ok(_) => commit(tx).await,
            Err(e) => {
                tracing::error!("Error updating record {}: {}", recommendation.name(), e);
                Err(rollback(tx, map_write_error(&e)).await)
            }
        }
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tx = self.begin().await?;

        let deleted = sqlx::query("DELETE FROM recommendations WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await;

        match deleted {
            Ok(_) => commit(tx).await,
            Err(e) => {
                tracing::error!("Error deleting record id={}: {}", id, e);
                Err(rollback(tx, map_write_error(&e)).await)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_row_to_not_found() {
        assert_eq!(
            map_write_error(&sqlx::Error::RowNotFound),
            RepositoryError::NotFound
        );
    }

    #[test]
    fn should_map_other_driver_errors_to_database_error() {
        assert_eq!(
            map_write_error(&sqlx::Error::PoolTimedOut),
            RepositoryError::DatabaseError
        );
        assert_eq!(
            map_write_error(&sqlx::Error::Protocol("unexpected message".to_string())),
            RepositoryError::DatabaseError
        );
    }
}
