//! Route definitions for the `/galleries` resource and its hotspots.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{gallery, hotspot};
use crate::state::AppState;

/// Routes mounted at `/galleries`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create (multipart)
/// DELETE /                          -> bulk_delete
/// GET    /{id}                      -> get_by_id ("new" sentinel allowed)
/// PUT    /{id}                      -> update (multipart)
/// DELETE /{id}                      -> delete
///
/// GET    /{id}/hotspots             -> list
/// POST   /{id}/hotspots             -> create
/// PUT    /{id}/hotspots/{index}     -> update
/// DELETE /{id}/hotspots/{index}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(gallery::list)
                .post(gallery::create)
                .delete(gallery::bulk_delete),
        )
        .route(
            "/{id}",
            get(gallery::get_by_id)
                .put(gallery::update)
                .delete(gallery::delete),
        )
        .route("/{id}/hotspots", get(hotspot::list).post(hotspot::create))
        .route(
            "/{id}/hotspots/{index}",
            put(hotspot::update).delete(hotspot::delete),
        )
}
