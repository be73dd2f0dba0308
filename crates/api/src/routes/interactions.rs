use axum::routing::get;
use axum::Router;

use crate::handlers::interaction;
use crate::state::AppState;

/// Routes mounted at `/interactions`.
///
/// ```text
/// GET  /       -> list (?learner_id=&item_id=&limit=&offset=)
/// POST /       -> create
/// GET  /{id}   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(interaction::list).post(interaction::create))
        .route("/{id}", get(interaction::get_by_id))
}
