pub mod health;
pub mod interactions;
pub mod items;
pub mod learners;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /items                              list, create
/// /items/{id}                         get, update, delete
/// /items/{id}/children                direct children
///
/// /learners                           list, create
/// /learners/{id}                      get
/// /learners/{id}/interactions         logs for one learner
///
/// /interactions                       list (filtered), create
/// /interactions/{id}                  get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/items", items::router())
        .nest("/learners", learners::router())
        .nest("/interactions", interactions::router())
}
