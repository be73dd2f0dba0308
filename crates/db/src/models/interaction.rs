//! Interaction log row model and list filter.

use lms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `interactions` table. Rows are never updated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InteractionLog {
    pub id: DbId,
    pub learner_id: DbId,
    pub item_id: DbId,
    pub kind: String,
    pub created_at: Timestamp,
}

/// Optional narrowing for interaction listings. `None` means "any".
#[derive(Debug, Clone, Default)]
pub struct InteractionFilter {
    pub learner_id: Option<DbId>,
    pub item_id: Option<DbId>,
}
