//! Repository for the `interactions` table.

use lms_core::schema::InteractionLogCreate;
use lms_core::types::DbId;
use sqlx::PgPool;

use crate::models::interaction::{InteractionFilter, InteractionLog};

const COLUMNS: &str = "id, learner_id, item_id, kind, created_at";

/// Provides append and read operations for interaction logs.
pub struct InteractionRepo;

impl InteractionRepo {
    /// Record an interaction.
    ///
    /// Unknown learner or item ids fail with `fk_interactions_learner_id` or
    /// `fk_interactions_item_id`.
    pub async fn create(
        pool: &PgPool,
        input: &InteractionLogCreate,
    ) -> Result<InteractionLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO interactions (learner_id, item_id, kind)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InteractionLog>(&query)
            .bind(input.learner_id)
            .bind(input.item_id)
            .bind(&input.kind)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InteractionLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interactions WHERE id = $1");
        sqlx::query_as::<_, InteractionLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List interactions matching `filter`, newest first.
    ///
    /// `limit` and `offset` are expected to be clamped by the caller.
    pub async fn list(
        pool: &PgPool,
        filter: &InteractionFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<InteractionLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM interactions
             WHERE ($1::BIGINT IS NULL OR learner_id = $1)
               AND ($2::BIGINT IS NULL OR item_id = $2)
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, InteractionLog>(&query)
            .bind(filter.learner_id)
            .bind(filter.item_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
