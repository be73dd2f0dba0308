//! Item row model.

use lms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub parent_id: Option<DbId>,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub item_type: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
