use axum::routing::get;
use axum::Router;

use crate::handlers::item;
use crate::state::AppState;

/// Routes mounted at `/items`.
///
/// ```text
/// GET    /                 -> list (?parent_id=)
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/children    -> list_children
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(item::list).post(item::create))
        .route(
            "/{id}",
            get(item::get_by_id).put(item::update).delete(item::delete),
        )
        .route("/{id}/children", get(item::list_children))
}
