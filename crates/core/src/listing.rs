//! Gallery list query: title filter, date range, sort keys and pagination.
//!
//! Sort keys are the strings the list UI sends (`"gallery asc"`, ...). Each
//! maps to a fixed field/direction pair; the repository turns that pair into
//! an `ORDER BY` clause.

use crate::dates::DateRange;
use crate::error::CoreError;

/// Galleries per page.
pub const PAGE_SIZE: i64 = 5;

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Column a gallery list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    CreatedAt,
    HotspotCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One of the six sort options of the gallery list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    TitleAsc,
    TitleDesc,
    DateAsc,
    DateDesc,
    HotspotAsc,
    HotspotDesc,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::DateDesc
    }
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::DateAsc,
        SortKey::DateDesc,
        SortKey::HotspotAsc,
        SortKey::HotspotDesc,
    ];

    /// Wire value, as sent by the list UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TitleAsc => "gallery asc",
            Self::TitleDesc => "gallery desc",
            Self::DateAsc => "date asc",
            Self::DateDesc => "date desc",
            Self::HotspotAsc => "hotspot asc",
            Self::HotspotDesc => "hotspot desc",
        }
    }

    /// Case-insensitive lookup. Returns `None` for unknown keys.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.split_whitespace().collect::<Vec<_>>().join(" ");
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(&normalized))
    }

    /// Lookup that falls back to [`SortKey::default`] for missing or unknown
    /// keys.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    pub fn field(&self) -> SortField {
        match self {
            Self::TitleAsc | Self::TitleDesc => SortField::Title,
            Self::DateAsc | Self::DateDesc => SortField::CreatedAt,
            Self::HotspotAsc | Self::HotspotDesc => SortField::HotspotCount,
        }
    }

    pub fn direction(&self) -> SortDirection {
        match self {
            Self::TitleAsc | Self::DateAsc | Self::HotspotAsc => SortDirection::Asc,
            Self::TitleDesc | Self::DateDesc | Self::HotspotDesc => SortDirection::Desc,
        }
    }
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Fully parsed list query handed to the repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryFilter {
    /// Case-insensitive title substring; `None` when blank.
    pub title: Option<String>,
    pub date_range: DateRange,
    pub sort: SortKey,
    /// 1-based page number.
    pub page: i64,
}

impl GalleryFilter {
    /// Build a filter from raw query-string values.
    ///
    /// Blank titles are dropped, the page is clamped to at least 1, unknown
    /// sort keys fall back to `date desc`. A malformed date range is a
    /// validation error.
    pub fn from_params(
        title: Option<&str>,
        date_range: Option<&str>,
        sort: Option<&str>,
        page: Option<i64>,
    ) -> Result<Self, CoreError> {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        let date_range = DateRange::parse(date_range.unwrap_or_default())?;
        Ok(Self {
            title,
            date_range,
            sort: SortKey::parse_or_default(sort),
            page: clamp_page(page),
        })
    }

    /// SQL `LIKE` pattern for the title filter, wildcards escaped.
    pub fn title_pattern(&self) -> Option<String> {
        self.title.as_deref().map(like_pattern)
    }

    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(PAGE_SIZE)
    }
}

/// Clamp a user-provided page number to at least 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Wrap `needle` in `%...%`, escaping `\`, `%` and `_` so the user's text is
/// matched literally (Postgres default escape character is `\`).
pub fn like_pattern(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len() + 2);
    out.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

/// Number of pages needed for `total` rows (at least 1).
pub fn total_pages(total: i64) -> i64 {
    if total <= 0 {
        1
    } else {
        (total + PAGE_SIZE - 1) / PAGE_SIZE
    }
}
