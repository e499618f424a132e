use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "migrations";

/// Database settings read from the environment
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub pool: DatabaseConfig,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - MIGRATIONS_PATH: directory holding the SQL migrations (default: "migrations")
    pub fn from_env() -> anyhow::Result<Self> {
        let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        Self::from_values(
            db_url,
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            env::var("MIGRATIONS_PATH").ok(),
        )
    }

    fn from_values(
        db_url: String,
        max_connections: Option<String>,
        migrations_path: Option<String>,
    ) -> anyhow::Result<Self> {
        let mut pool = DatabaseConfig::new(db_url);
        if let Some(raw) = max_connections {
            let max_connections = raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?;
            pool = pool.with_max_connections(max_connections);
        }

        Ok(Self {
            pool,
            migrations_path: migrations_path
                .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
        })
    }
}

/// Initialize the connection pool and bring the schema up to date
///
/// # Errors
/// Returns error if the connection fails or a migration cannot be applied
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&settings.pool).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    tracing::info!("Database ready, migrations applied from {}", settings.migrations_path);
    Ok(pool)
}
