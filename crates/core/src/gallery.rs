//! Gallery identifiers, save payload validation and upload constraints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::hotspot::Hotspot;
use crate::types::DbId;

/// Path segment that opens the creation form instead of an existing gallery.
pub const NEW_GALLERY_SENTINEL: &str = "new";

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: u64 = 255;

/// Maximum hotspots per gallery.
pub const MAX_HOTSPOTS: u64 = 100;

/// Maximum size of an uploaded image part (bytes).
pub const MAX_UPLOAD_BYTES: usize = 10_000_000;

/// Content types accepted for gallery images.
pub const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/gif", "image/jpeg", "image/png"];

// ---------------------------------------------------------------------------
// GalleryRef
// ---------------------------------------------------------------------------

/// Target of a gallery detail route: the creation template or a stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryRef {
    New,
    Id(DbId),
}

impl GalleryRef {
    pub fn parse(segment: &str) -> Result<Self, CoreError> {
        let segment = segment.trim();
        if segment.eq_ignore_ascii_case(NEW_GALLERY_SENTINEL) {
            return Ok(Self::New);
        }
        segment
            .parse::<DbId>()
            .ok()
            .filter(|id| *id > 0)
            .map(Self::Id)
            .ok_or_else(|| CoreError::Validation(format!("Invalid gallery id '{segment}'")))
    }

    /// The stored id, or a validation error for the creation sentinel.
    pub fn require_id(self) -> Result<DbId, CoreError> {
        match self {
            Self::Id(id) => Ok(id),
            Self::New => Err(CoreError::Validation(
                "This operation requires an existing gallery".to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Save payload
// ---------------------------------------------------------------------------

/// JSON carried in the `data` multipart field of create and update requests.
///
/// `id_img` is the image-host file id of the image being replaced; the server
/// prefers the id it stored itself and only falls back to this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SavePayload {
    #[validate(length(max = 255))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 100), nested)]
    pub hotspots: Vec<Hotspot>,
    #[serde(default, alias = "idImg", skip_serializing_if = "Option::is_none")]
    pub id_img: Option<String>,
}

impl SavePayload {
    /// Run every payload rule, returning the first violation.
    pub fn check(&self) -> Result<(), CoreError> {
        validate_title(&self.title).map_err(CoreError::Validation)?;
        self.validate()?;
        Ok(())
    }

    /// Title with surrounding whitespace removed, as it is stored.
    pub fn trimmed_title(&self) -> &str {
        self.title.trim()
    }
}

/// Validate that a title is present and within the length limit.
pub fn validate_title(title: &str) -> Result<(), String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err("Title is required".to_string());
    }
    if trimmed.chars().count() as u64 > MAX_TITLE_LEN {
        return Err(format!(
            "Title exceeds maximum length of {MAX_TITLE_LEN} characters"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Upload constraints
// ---------------------------------------------------------------------------

/// Validate an uploaded part's content type against [`ACCEPTED_IMAGE_TYPES`].
///
/// Parameters such as `; charset=...` are ignored.
pub fn validate_content_type(content_type: &str) -> Result<(), CoreError> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    if ACCEPTED_IMAGE_TYPES.contains(&essence.as_str()) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported image type '{content_type}'. Accepted: {}",
            ACCEPTED_IMAGE_TYPES.join(", ")
        )))
    }
}

/// Validate an uploaded part's size.
pub fn validate_upload_size(len: usize) -> Result<(), CoreError> {
    if len == 0 {
        return Err(CoreError::Validation("Uploaded file is empty".to_string()));
    }
    if len > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "Uploaded file exceeds maximum size of {MAX_UPLOAD_BYTES} bytes"
        )));
    }
    Ok(())
}
