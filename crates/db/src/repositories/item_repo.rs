//! Repository for the `items` table.

use lms_core::schema::{ItemCreate, ItemUpdate};
use lms_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::Item;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, parent_id, title, type, description, created_at, updated_at";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row.
    ///
    /// A `parent_id` that matches no item fails with `fk_items_parent_id`.
    pub async fn create(pool: &PgPool, input: &ItemCreate) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (parent_id, title, type, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(input.parent_id)
            .bind(&input.title)
            .bind(&input.item_type)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all items, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY id");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// List the direct children of `parent_id`, oldest first.
    pub async fn list_children(pool: &PgPool, parent_id: DbId) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE parent_id = $1 ORDER BY id");
        sqlx::query_as::<_, Item>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    /// Replace an item's title and description.
    ///
    /// Both columns are always written; an [`ItemUpdate`] built without a
    /// description clears it. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ItemUpdate,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET title = $2, description = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item and, through the cascade, its subtree and interactions.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
