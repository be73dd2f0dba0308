//! Handlers for the `/learners` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lms_core::error::CoreError;
use lms_core::paging::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use lms_core::schema::{LearnerCreate, RawFields, Schema};
use lms_core::types::DbId;
use lms_db::models::interaction::InteractionFilter;
use lms_db::repositories::{InteractionRepo, LearnerRepo};

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Learner",
        id,
    })
}

/// GET /api/v1/learners
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let learners = LearnerRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: learners }))
}

/// POST /api/v1/learners
///
/// Empty names and emails pass; a duplicate email is a 409 from storage.
pub async fn create(
    State(state): State<AppState>,
    Json(fields): Json<RawFields>,
) -> AppResult<impl IntoResponse> {
    let input = LearnerCreate::construct(&fields)?;
    let learner = LearnerRepo::create(&state.pool, &input).await?;
    tracing::info!(id = learner.id, "Learner created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: learner })))
}

/// GET /api/v1/learners/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let learner = LearnerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: learner }))
}

/// GET /api/v1/learners/{id}/interactions?limit=&offset=
pub async fn list_interactions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    LearnerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let filter = InteractionFilter {
        learner_id: Some(id),
        item_id: None,
    };
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);
    let logs = InteractionRepo::list(&state.pool, &filter, limit, offset).await?;
    Ok(Json(DataResponse { data: logs }))
}
