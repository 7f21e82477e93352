//! Gallery entity model and DTOs.

use hotspot_core::hotspot::Hotspot;
use hotspot_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `galleries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Gallery {
    pub id: DbId,
    pub title: String,
    pub image_url: String,
    /// Image-host file id of `image_url`.
    pub image_file_id: Option<String>,
    pub hotspots: Json<Vec<Hotspot>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Gallery {
    pub fn hotspot_count(&self) -> usize {
        self.hotspots.0.len()
    }
}

/// DTO for inserting a gallery after its image has been uploaded.
#[derive(Debug, Clone)]
pub struct CreateGallery {
    pub title: String,
    pub image_url: String,
    pub image_file_id: Option<String>,
    pub hotspots: Vec<Hotspot>,
}

/// A replacement image for an existing gallery.
#[derive(Debug, Clone)]
pub struct ReplacementImage {
    pub url: String,
    pub file_id: String,
}

/// DTO for a full gallery update. `image` is `None` when the image is kept.
#[derive(Debug, Clone)]
pub struct UpdateGallery {
    pub title: String,
    pub hotspots: Vec<Hotspot>,
    pub image: Option<ReplacementImage>,
}

/// What remains of a deleted row: enough to clean up its hosted image.
#[derive(Debug, Clone, FromRow)]
pub struct DeletedGallery {
    pub id: DbId,
    pub image_file_id: Option<String>,
}
