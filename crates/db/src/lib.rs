//! Persistence layer: connection pool, migrations, row models, repositories.
//!
//! This is the second validation stage. Records arrive here already
//! shape-checked by `lms_core::schema`; foreign keys and uniqueness are
//! enforced by the database and reported through [`integrity`].

use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;

pub mod integrity;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
