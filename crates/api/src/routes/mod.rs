pub mod galleries;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /galleries                                list, create, bulk delete
/// /galleries/{id}                           get (or "new" template), update, delete
/// /galleries/{id}/hotspots                  list, append
/// /galleries/{id}/hotspots/{index}          replace, remove
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/galleries", galleries::router())
}
