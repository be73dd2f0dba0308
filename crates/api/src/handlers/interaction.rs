//! Handlers for the `/interactions` resource.
//!
//! `learner_id` and `item_id` are only type-checked before the insert;
//! `0` or an unknown id comes back as a 422 from the foreign keys.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lms_core::error::CoreError;
use lms_core::paging::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use lms_core::schema::{InteractionLogCreate, RawFields, Schema};
use lms_core::types::DbId;
use lms_db::models::interaction::InteractionFilter;
use lms_db::repositories::InteractionRepo;

use crate::error::{AppError, AppResult};
use crate::query::InteractionListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/interactions?learner_id=&item_id=&limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<InteractionListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = InteractionFilter {
        learner_id: params.learner_id,
        item_id: params.item_id,
    };
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);
    let logs = InteractionRepo::list(&state.pool, &filter, limit, offset).await?;
    tracing::debug!(count = logs.len(), limit, offset, "Listed interactions");
    Ok(Json(DataResponse { data: logs }))
}

/// POST /api/v1/interactions
pub async fn create(
    State(state): State<AppState>,
    Json(fields): Json<RawFields>,
) -> AppResult<impl IntoResponse> {
    let input = InteractionLogCreate::construct(&fields)?;
    let log = InteractionRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = log.id,
        learner_id = log.learner_id,
        item_id = log.item_id,
        kind = %log.kind,
        "Interaction recorded"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: log })))
}

/// GET /api/v1/interactions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let log = InteractionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InteractionLog",
            id,
        }))?;
    Ok(Json(DataResponse { data: log }))
}
