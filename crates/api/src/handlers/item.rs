//! Handlers for the `/items` resource.
//!
//! Request bodies go through the item schemas first; a `parent_id` that
//! passes the schema but names no item is rejected by the database.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lms_core::error::CoreError;
use lms_core::schema::{ItemCreate, ItemUpdate, RawFields, Schema};
use lms_core::types::DbId;
use lms_db::repositories::ItemRepo;

use crate::error::{AppError, AppResult};
use crate::query::ItemListParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Item", id })
}

/// GET /api/v1/items?parent_id=
///
/// List all items, or only the direct children of `parent_id`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ItemListParams>,
) -> AppResult<impl IntoResponse> {
    let items = match params.parent_id {
        Some(parent_id) => ItemRepo::list_children(&state.pool, parent_id).await?,
        None => ItemRepo::list(&state.pool).await?,
    };
    tracing::debug!(count = items.len(), "Listed items");
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/items
pub async fn create(
    State(state): State<AppState>,
    Json(fields): Json<RawFields>,
) -> AppResult<impl IntoResponse> {
    let input = ItemCreate::construct(&fields)?;
    let item = ItemRepo::create(&state.pool, &input).await?;
    tracing::info!(id = item.id, parent_id = ?item.parent_id, "Item created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// GET /api/v1/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: item }))
}

/// GET /api/v1/items/{id}/children
pub async fn list_children(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let children = ItemRepo::list_children(&state.pool, id).await?;
    Ok(Json(DataResponse { data: children }))
}

/// PUT /api/v1/items/{id}
///
/// Replaces title and description; omitted fields are written as `""`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(fields): Json<RawFields>,
) -> AppResult<impl IntoResponse> {
    let input = ItemUpdate::construct(&fields)?;
    let item = ItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Item updated");
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/items/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ItemRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
