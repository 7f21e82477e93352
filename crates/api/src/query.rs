//! Query and body types shared by the gallery handlers.

use hotspot_core::types::DbId;
use serde::Deserialize;

/// Query parameters of `GET /galleries`.
///
/// `date_range` is also accepted as `dateOfPicker`, the name the list UI
/// uses in its URL.
#[derive(Debug, Default, Deserialize)]
pub struct GalleryListParams {
    pub title: Option<String>,
    #[serde(alias = "dateOfPicker")]
    pub date_range: Option<String>,
    pub sort: Option<String>,
    pub page: Option<i64>,
}

/// Body of `DELETE /galleries`.
#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<DbId>,
}
