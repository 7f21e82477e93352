//! Hotspot types: the persisted sub-document, the editor-local `Point`, and
//! product picker results.
//!
//! Coordinates are percentages of the image bounds in both shapes. The two
//! shapes are converted into each other only when a gallery is loaded into
//! the editor or when the editor contents are submitted.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Lower bound for hotspot coordinates (percent).
pub const MIN_PERCENT: f64 = 0.0;

/// Upper bound for hotspot coordinates (percent).
pub const MAX_PERCENT: f64 = 100.0;

/// Position given to hotspots added from the "Add hotspot" action.
pub const DEFAULT_POSITION: f64 = 50.0;

/// Label applied when a picked product carries no title.
pub const DEFAULT_PRODUCT_LABEL: &str = "New Hotspot";

/// Clamp a coordinate into `[0, 100]`.
///
/// Non-numeric input (`NaN`) collapses to the lower bound so a bad pointer
/// event can never leave a marker outside the image.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_PERCENT;
    }
    value.clamp(MIN_PERCENT, MAX_PERCENT)
}

// ---------------------------------------------------------------------------
// Persisted hotspot
// ---------------------------------------------------------------------------

/// A hotspot as stored inside its gallery.
///
/// `product_id` is the Shopify product GID (`gid://shopify/Product/123`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Hotspot {
    #[validate(range(min = 0.0, max = 100.0))]
    pub x: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub y: f64,
    #[serde(default, alias = "productId")]
    pub product_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub img: String,
}

impl Hotspot {
    /// Numeric tail of the product GID, used to build storefront/admin links.
    pub fn product_numeric_id(&self) -> Option<&str> {
        product_numeric_id(&self.product_id)
    }
}

/// Extract the last path segment of a product GID.
///
/// Returns `None` for an empty id or an id ending in `/`.
pub fn product_numeric_id(gid: &str) -> Option<&str> {
    gid.rsplit('/').next().filter(|tail| !tail.is_empty())
}

// ---------------------------------------------------------------------------
// Editor point
// ---------------------------------------------------------------------------

/// Editor-local representation of a hotspot.
///
/// `saved == false` marks a hotspot that is being created and has never been
/// confirmed. `id` holds the product GID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub saved: bool,
    pub label: String,
    pub img: String,
    pub id: String,
}

impl Point {
    /// A fresh, unsaved point at the given position (clamped).
    pub fn unsaved_at(x: f64, y: f64) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
            saved: false,
            label: String::new(),
            img: String::new(),
            id: String::new(),
        }
    }

    /// A fresh, unsaved point at the default position.
    pub fn unsaved_default() -> Self {
        Self::unsaved_at(DEFAULT_POSITION, DEFAULT_POSITION)
    }

    /// Text shown in the hotspot list: the product label, or a positional
    /// fallback (1-based) when no product is attached yet.
    pub fn display_label(&self, index: usize) -> String {
        if self.label.is_empty() {
            format!("Hotspot #{}", index + 1)
        } else {
            self.label.clone()
        }
    }
}

impl From<&Hotspot> for Point {
    fn from(h: &Hotspot) -> Self {
        Self {
            x: clamp_percent(h.x),
            y: clamp_percent(h.y),
            saved: true,
            label: h.title.clone(),
            img: h.img.clone(),
            id: h.product_id.clone(),
        }
    }
}

impl From<&Point> for Hotspot {
    fn from(p: &Point) -> Self {
        Self {
            x: clamp_percent(p.x),
            y: clamp_percent(p.y),
            product_id: p.id.clone(),
            title: p.label.clone(),
            img: p.img.clone(),
        }
    }
}

/// Convert persisted hotspots into editor points (all marked saved).
pub fn points_from_hotspots(hotspots: &[Hotspot]) -> Vec<Point> {
    hotspots.iter().map(Point::from).collect()
}

/// Convert editor points into the persisted shape.
pub fn hotspots_from_points(points: &[Point]) -> Vec<Hotspot> {
    points.iter().map(Hotspot::from).collect()
}

// ---------------------------------------------------------------------------
// Product picker
// ---------------------------------------------------------------------------

/// An image attached to a product resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub original_src: Option<String>,
}

/// A product returned by the product picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResource {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

impl ProductResource {
    /// Source URL of the first image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .first()
            .and_then(|img| img.original_src.as_deref())
    }
}

/// Outcome of opening the product picker.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerResult {
    Selected(ProductResource),
    Cancelled,
}

impl PickerResult {
    /// Build a result from the raw selection list. The picker is single-select;
    /// an empty selection means the merchant closed it without choosing.
    pub fn from_selection(selection: Vec<ProductResource>) -> Self {
        match selection.into_iter().next() {
            Some(product) => Self::Selected(product),
            None => Self::Cancelled,
        }
    }
}
