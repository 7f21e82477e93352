//! Handlers for the `/galleries` resource.
//!
//! Create and update take a multipart body: a `data` part holding the JSON
//! save payload and, optionally on update, a `file` part with the image.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hotspot_core::dates::format_date;
use hotspot_core::error::CoreError;
use hotspot_core::gallery::{validate_content_type, validate_upload_size, GalleryRef, SavePayload};
use hotspot_core::hotspot::{points_from_hotspots, Point};
use hotspot_core::listing::GalleryFilter;
use hotspot_core::types::DbId;
use hotspot_db::models::gallery::{CreateGallery, Gallery, ReplacementImage, UpdateGallery};
use hotspot_db::repositories::GalleryRepo;
use hotspot_imagekit::UploadFile;
use serde::Serialize;
use tokio::task::JoinSet;

use crate::error::{AppError, AppResult};
use crate::query::{BulkDeleteRequest, GalleryListParams};
use crate::response::{DataResponse, PageResponse, Pagination};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A gallery row as shown in the list, with derived display fields.
#[derive(Debug, Serialize)]
pub struct GalleryListItem {
    #[serde(flatten)]
    pub gallery: Gallery,
    pub hotspot_count: usize,
    /// Creation date as `DD/MM/YYYY`.
    pub created_date: String,
}

impl From<Gallery> for GalleryListItem {
    fn from(gallery: Gallery) -> Self {
        Self {
            hotspot_count: gallery.hotspot_count(),
            created_date: format_date(gallery.created_at),
            gallery,
        }
    }
}

/// Detail view of one gallery, or the empty creation template.
#[derive(Debug, Serialize)]
pub struct GalleryPage {
    /// `"new"` for the creation template, `"edit"` for a stored gallery.
    pub page: &'static str,
    pub data: Option<Gallery>,
    /// Editor seed: the stored hotspots as saved points.
    pub points: Vec<Point>,
}

#[derive(Debug, Serialize)]
pub struct BulkDeleteResult {
    pub deleted: Vec<DbId>,
    /// Number of hosted images that could not be removed.
    pub image_failures: usize,
}

// ---------------------------------------------------------------------------
// Multipart form
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct GalleryForm {
    data: Option<SavePayload>,
    file: Option<UploadFile>,
}

impl GalleryForm {
    fn require_data(&mut self) -> AppResult<SavePayload> {
        let data = self
            .data
            .take()
            .ok_or_else(|| AppError::BadRequest("Missing 'data' field".to_string()))?;
        data.check()?;
        Ok(data)
    }
}

/// Read the `data` and `file` parts; unknown parts are ignored.
async fn read_gallery_form(mut multipart: Multipart, max_upload_bytes: usize) -> AppResult<GalleryForm> {
    let mut form = GalleryForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "data" => {
                let text = field.text().await?;
                let payload: SavePayload = serde_json::from_str(&text)
                    .map_err(|e| AppError::BadRequest(format!("Invalid 'data' field: {e}")))?;
                form.data = Some(payload);
            }
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().unwrap_or_default().to_string();
                validate_content_type(&content_type)?;

                let bytes = field.bytes().await?;
                if bytes.len() > max_upload_bytes {
                    return Err(AppError::PayloadTooLarge(format!(
                        "Image exceeds maximum size of {max_upload_bytes} bytes"
                    )));
                }
                validate_upload_size(bytes.len())?;

                form.file = Some(UploadFile::new(
                    file_name.as_deref(),
                    content_type,
                    bytes.to_vec(),
                ));
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Remove an image whose gallery write did not happen.
async fn discard_upload(state: &AppState, file_id: &str) {
    if let Err(e) = state.image_host.delete(file_id).await {
        tracing::warn!(file_id, error = %e, "Failed to remove orphaned upload");
    }
}

/// Delete a gallery's previous image. Failure leaves an orphan and is only
/// logged.
async fn delete_replaced_image(state: &AppState, gallery_id: DbId, file_id: &str) {
    match state.image_host.delete(file_id).await {
        Ok(()) => {}
        Err(e) if e.is_not_found() => {
            tracing::debug!(gallery_id, file_id, "Replaced image already gone");
        }
        Err(e) => {
            tracing::warn!(gallery_id, file_id, error = %e, "Failed to delete replaced image");
        }
    }
}

fn gallery_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Gallery",
        id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/galleries
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<GalleryListParams>,
) -> AppResult<Json<PageResponse<GalleryListItem>>> {
    let filter = GalleryFilter::from_params(
        params.title.as_deref(),
        params.date_range.as_deref(),
        params.sort.as_deref(),
        params.page,
    )?;

    let (rows, total) = GalleryRepo::list(&state.pool, &filter).await?;

    Ok(Json(PageResponse {
        data: rows.into_iter().map(GalleryListItem::from).collect(),
        pagination: Pagination::new(total, filter.page),
    }))
}

/// GET /api/v1/galleries/{id}
///
/// `id` may be the `new` sentinel, which returns the empty creation template.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> AppResult<Json<GalleryPage>> {
    let page = match GalleryRef::parse(&segment)? {
        GalleryRef::New => GalleryPage {
            page: "new",
            data: None,
            points: Vec::new(),
        },
        GalleryRef::Id(id) => {
            let gallery = GalleryRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or_else(|| gallery_not_found(id))?;
            GalleryPage {
                page: "edit",
                points: points_from_hotspots(&gallery.hotspots.0),
                data: Some(gallery),
            }
        }
    };
    Ok(Json(page))
}

/// POST /api/v1/galleries
///
/// Upload the image, then insert the gallery. The upload is removed again if
/// the insert fails.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Gallery>>)> {
    let mut form = read_gallery_form(multipart, state.config.max_upload_bytes).await?;
    let payload = form.require_data()?;
    let file = form
        .file
        .take()
        .ok_or_else(|| AppError::BadRequest("Missing 'file' field".to_string()))?;

    let uploaded = state.image_host.upload(file).await?;

    let input = CreateGallery {
        title: payload.trimmed_title().to_string(),
        image_url: uploaded.url,
        image_file_id: Some(uploaded.file_id.clone()),
        hotspots: payload.hotspots,
    };

    let gallery = match GalleryRepo::create(&state.pool, &input).await {
        Ok(gallery) => gallery,
        Err(e) => {
            discard_upload(&state, &uploaded.file_id).await;
            return Err(e.into());
        }
    };

    tracing::info!(gallery_id = gallery.id, hotspots = gallery.hotspot_count(), "Gallery created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: gallery })))
}

/// PUT /api/v1/galleries/{id}
///
/// With a `file` part the new image is uploaded first, the row is updated,
/// and then the previous image is deleted.
pub async fn update(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<Gallery>>> {
    let id = GalleryRef::parse(&segment)?.require_id()?;
    let mut form = read_gallery_form(multipart, state.config.max_upload_bytes).await?;
    let payload = form.require_data()?;

    let replacement = match form.file.take() {
        Some(file) => {
            let uploaded = state.image_host.upload(file).await?;
            Some(ReplacementImage {
                url: uploaded.url,
                file_id: uploaded.file_id,
            })
        }
        None => None,
    };
    let new_file_id = replacement.as_ref().map(|img| img.file_id.clone());

    let input = UpdateGallery {
        title: payload.trimmed_title().to_string(),
        hotspots: payload.hotspots,
        image: replacement,
    };

    let updated = match GalleryRepo::update(&state.pool, id, &input).await {
        Ok(Some(updated)) => Ok(updated),
        Ok(None) => Err(gallery_not_found(id)),
        Err(e) => Err(AppError::from(e)),
    };
    let (gallery, replaced_file_id) = match updated {
        Ok(updated) => updated,
        Err(err) => {
            if let Some(file_id) = &new_file_id {
                discard_upload(&state, file_id).await;
            }
            return Err(err);
        }
    };

    if new_file_id.is_some() {
        if let Some(old) = replaced_file_id.or(payload.id_img) {
            delete_replaced_image(&state, id, &old).await;
        }
    }

    tracing::info!(gallery_id = id, image_replaced = new_file_id.is_some(), "Gallery updated");
    Ok(Json(DataResponse { data: gallery }))
}

/// DELETE /api/v1/galleries/{id}
///
/// The row delete and the image delete are issued together. Only a database
/// failure fails the request; an image that cannot be removed is logged.
pub async fn delete(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> AppResult<StatusCode> {
    let id = GalleryRef::parse(&segment)?.require_id()?;
    let gallery = GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| gallery_not_found(id))?;

    let image_delete = async {
        match gallery.image_file_id.as_deref() {
            Some(file_id) => state.image_host.delete(file_id).await,
            None => Ok(()),
        }
    };
    let (image_result, db_result) =
        tokio::join!(image_delete, GalleryRepo::delete(&state.pool, id));

    if let Err(e) = image_result {
        if !e.is_not_found() {
            tracing::warn!(gallery_id = id, error = %e, "Failed to delete gallery image");
        }
    }

    if db_result? {
        tracing::info!(gallery_id = id, "Gallery deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(gallery_not_found(id))
    }
}

/// DELETE /api/v1/galleries
///
/// Bulk delete by id. Ids that do not exist are skipped.
pub async fn bulk_delete(
    State(state): State<AppState>,
    Json(input): Json<BulkDeleteRequest>,
) -> AppResult<Json<DataResponse<BulkDeleteResult>>> {
    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".to_string()));
    }

    let deleted = GalleryRepo::delete_many(&state.pool, &input.ids).await?;

    let mut tasks = JoinSet::new();
    for row in &deleted {
        if let Some(file_id) = row.image_file_id.clone() {
            let host = state.image_host.clone();
            let gallery_id = row.id;
            tasks.spawn(async move {
                match host.delete(&file_id).await {
                    Ok(()) => true,
                    Err(e) if e.is_not_found() => true,
                    Err(e) => {
                        tracing::warn!(gallery_id, file_id = %file_id, error = %e, "Failed to delete gallery image");
                        false
                    }
                }
            });
        }
    }

    let mut image_failures = 0;
    while let Some(joined) = tasks.join_next().await {
        if !matches!(joined, Ok(true)) {
            image_failures += 1;
        }
    }

    let deleted: Vec<DbId> = deleted.into_iter().map(|row| row.id).collect();
    tracing::info!(count = deleted.len(), image_failures, "Galleries bulk deleted");

    Ok(Json(DataResponse {
        data: BulkDeleteResult {
            deleted,
            image_failures,
        },
    }))
}
