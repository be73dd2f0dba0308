use axum::routing::get;
use axum::Router;

use crate::handlers::learner;
use crate::state::AppState;

/// Routes mounted at `/learners`.
///
/// ```text
/// GET  /                     -> list
/// POST /                     -> create
/// GET  /{id}                 -> get_by_id
/// GET  /{id}/interactions    -> list_interactions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(learner::list).post(learner::create))
        .route("/{id}", get(learner::get_by_id))
        .route("/{id}/interactions", get(learner::list_interactions))
}
