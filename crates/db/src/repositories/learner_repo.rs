//! Repository for the `learners` table.

use lms_core::schema::LearnerCreate;
use lms_core::types::DbId;
use sqlx::PgPool;

use crate::models::learner::Learner;

const COLUMNS: &str = "id, name, email, created_at, updated_at";

/// Provides create and read operations for learners.
pub struct LearnerRepo;

impl LearnerRepo {
    /// Insert a new learner. A duplicate email fails with `uq_learners_email`.
    pub async fn create(pool: &PgPool, input: &LearnerCreate) -> Result<Learner, sqlx::Error> {
        let query = format!(
            "INSERT INTO learners (name, email) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Learner>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Learner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM learners WHERE id = $1");
        sqlx::query_as::<_, Learner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all learners ordered by name, then id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Learner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM learners ORDER BY name, id");
        sqlx::query_as::<_, Learner>(&query).fetch_all(pool).await
    }
}
