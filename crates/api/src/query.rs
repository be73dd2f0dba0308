//! Query parameter types for list endpoints.

use lms_core::types::DbId;
use serde::Deserialize;

/// `GET /items?parent_id=`
#[derive(Debug, Deserialize)]
pub struct ItemListParams {
    pub parent_id: Option<DbId>,
}

/// `GET /interactions?learner_id=&item_id=&limit=&offset=`
///
/// Limits are clamped in the handler via `lms_core::paging`.
#[derive(Debug, Deserialize)]
pub struct InteractionListParams {
    pub learner_id: Option<DbId>,
    pub item_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// `GET /learners/{id}/interactions?limit=&offset=`
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
