use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "./migrations";

/// Initialize database connection pool from environment variables and apply
/// pending migrations
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Directory holding the SQL migrations (default: "./migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, connection fails or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let mut db_config = DatabaseConfig::new(db_url);
    if let Some(max_connections) = parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok())
    {
        db_config = db_config.with_max_connections(max_connections);
    }

    let pool = create_postgres_pool(&db_config).await?;

    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
    run_migrations(&pool, &migrations_path).await?;

    Ok(pool)
}

fn parse_max_connections(raw: Option<String>) -> Option<u32> {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|max| *max > 0)
}
