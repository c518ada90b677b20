use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";

/// Initialize database connection pool from environment variables and apply migrations
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Directory holding the schema migrations
///
/// # Errors
/// Returns error if DATABASE_URL is not set, connection fails or migrations fail
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let mut config = DatabaseConfig::new(db_url);
    if let Ok(raw) = env::var("DATABASE_MAX_CONNECTIONS") {
        let max_connections = raw
            .parse()
            .with_context(|| format!("invalid DATABASE_MAX_CONNECTIONS: {raw}"))?;
        config = config.with_max_connections(max_connections);
    }

    let pool = create_postgres_pool(&config).await?;

    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
    run_migrations(&pool, &migrations_path).await?;
    tracing::info!("database migrations applied from {}", migrations_path);

    Ok(pool)
}
