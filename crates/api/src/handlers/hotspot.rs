//! Handlers for `/galleries/{id}/hotspots`.
//!
//! Hotspots have no id of their own; they are addressed by their position in
//! the gallery's list.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hotspot_core::error::CoreError;
use hotspot_core::gallery::MAX_HOTSPOTS;
use hotspot_core::hotspot::Hotspot;
use hotspot_core::types::DbId;
use hotspot_db::repositories::GalleryRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Resolve why a positional update matched nothing.
async fn missing_target(state: &AppState, id: DbId, index: usize) -> AppError {
    match GalleryRepo::find_by_id(&state.pool, id).await {
        Ok(Some(_)) => AppError::Core(CoreError::NotFound {
            entity: "Hotspot",
            id: index as DbId,
        }),
        Ok(None) => AppError::Core(CoreError::NotFound {
            entity: "Gallery",
            id,
        }),
        Err(e) => e.into(),
    }
}

fn to_position(index: usize) -> Option<i32> {
    i32::try_from(index).ok()
}

/// GET /api/v1/galleries/{id}/hotspots
pub async fn list(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Hotspot>>>> {
    let hotspots = GalleryRepo::list_hotspots(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Gallery",
            id,
        }))?;
    Ok(Json(DataResponse { data: hotspots }))
}

/// POST /api/v1/galleries/{id}/hotspots
///
/// Append a hotspot. Returns the gallery's full hotspot list.
pub async fn create(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<Hotspot>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<Hotspot>>>)> {
    input.validate().map_err(CoreError::from)?;

    match GalleryRepo::append_hotspot(&state.pool, id, &input, MAX_HOTSPOTS as i32).await? {
        Some(gallery) => Ok((
            StatusCode::CREATED,
            Json(DataResponse {
                data: gallery.hotspots.0,
            }),
        )),
        None => match GalleryRepo::find_by_id(&state.pool, id).await? {
            Some(_) => Err(AppError::Core(CoreError::Conflict(format!(
                "Gallery {id} already has the maximum of {MAX_HOTSPOTS} hotspots"
            )))),
            None => Err(AppError::Core(CoreError::NotFound {
                entity: "Gallery",
                id,
            })),
        },
    }
}

/// PUT /api/v1/galleries/{id}/hotspots/{index}
pub async fn update(
    State(state): State<AppState>,
    Path((id, index)): Path<(DbId, usize)>,
    Json(input): Json<Hotspot>,
) -> AppResult<Json<DataResponse<Vec<Hotspot>>>> {
    input.validate().map_err(CoreError::from)?;

    let updated = match to_position(index) {
        Some(position) => GalleryRepo::replace_hotspot(&state.pool, id, position, &input).await?,
        None => None,
    };
    match updated {
        Some(gallery) => Ok(Json(DataResponse {
            data: gallery.hotspots.0,
        })),
        None => Err(missing_target(&state, id, index).await),
    }
}

/// DELETE /api/v1/galleries/{id}/hotspots/{index}
pub async fn delete(
    State(state): State<AppState>,
    Path((id, index)): Path<(DbId, usize)>,
) -> AppResult<StatusCode> {
    let removed = match to_position(index) {
        Some(position) => GalleryRepo::remove_hotspot(&state.pool, id, position).await?,
        None => None,
    };
    match removed {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(missing_target(&state, id, index).await),
    }
}
