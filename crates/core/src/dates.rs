//! Date parsing, formatting and date-range filters for the gallery list.
//!
//! The list filter travels in the URL as `DD-MM-YYYY->DD-MM-YYYY`; either
//! side may be empty. Both ends are inclusive whole days in UTC.

use chrono::{Datelike, Days, NaiveDate, NaiveTime};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Earliest year accepted by [`parse_date`].
pub const MIN_YEAR: i32 = 1900;

/// Latest year accepted by [`parse_date`].
pub const MAX_YEAR: i32 = 9999;

/// Separator between the two ends of a date range parameter.
pub const RANGE_SEPARATOR: &str = "->";

/// Parse a strict `DD-MM-YYYY` date.
///
/// Returns `None` for malformed input and for out-of-range day, month or year
/// (including days past the end of the month; leap years are honoured).
///
/// ```
/// use hotspot_core::dates::parse_date;
/// assert!(parse_date("29-02-2024").is_some());
/// assert!(parse_date("29-02-2023").is_none());
/// assert!(parse_date("2024-02-29").is_none());
/// ```
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'-' || bytes[5] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let day: u32 = input[0..2].parse().ok()?;
    let month: u32 = input[3..5].parse().ok()?;
    let year: i32 = input[6..10].parse().ok()?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Display form `DD/MM/YYYY` of a UTC timestamp.
pub fn format_date(value: Timestamp) -> String {
    value.format("%d/%m/%Y").to_string()
}

/// URL form `DD-MM-YYYY`, the inverse of [`parse_date`].
pub fn format_param_date(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{:04}", date.day(), date.month(), date.year())
}

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// Inclusive creation-date filter. `None` on either side means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Parse `from->to`. An empty string is unbounded; a single date without
    /// separator filters that one day.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Self::default());
        }

        let (from_raw, to_raw) = match input.split_once(RANGE_SEPARATOR) {
            Some((from, to)) => (from.trim(), to.trim()),
            None => (input, input),
        };

        let side = |raw: &str| -> Result<Option<NaiveDate>, CoreError> {
            if raw.is_empty() {
                return Ok(None);
            }
            parse_date(raw).map(Some).ok_or_else(|| {
                CoreError::Validation(format!("Invalid date '{raw}'. Expected DD-MM-YYYY"))
            })
        };

        let range = Self {
            from: side(from_raw)?,
            to: side(to_raw)?,
        };

        if let (Some(from), Some(to)) = (range.from, range.to) {
            if from > to {
                return Err(CoreError::Validation(format!(
                    "Date range start {} is after end {}",
                    format_param_date(from),
                    format_param_date(to)
                )));
            }
        }
        Ok(range)
    }

    /// Serialize back to the URL form. Unbounded ranges produce `""`.
    pub fn to_param(&self) -> String {
        if self.is_unbounded() {
            return String::new();
        }
        format!(
            "{}{RANGE_SEPARATOR}{}",
            self.from.map(format_param_date).unwrap_or_default(),
            self.to.map(format_param_date).unwrap_or_default()
        )
    }

    /// Timestamp bounds for the store: `[start_inclusive, end_exclusive)`.
    ///
    /// The end is midnight after the `to` day so the whole last day matches.
    pub fn timestamp_bounds(&self) -> (Option<Timestamp>, Option<Timestamp>) {
        let start = self.from.map(start_of_day);
        let end = self
            .to
            .and_then(|d| d.checked_add_days(Days::new(1)))
            .map(start_of_day);
        (start, end)
    }
}

fn start_of_day(date: NaiveDate) -> Timestamp {
    date.and_time(NaiveTime::default()).and_utc()
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Quick picks offered next to the custom date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePreset {
    Today,
    Yesterday,
    Last7Days,
    Last30Days,
    Last90Days,
    Last365Days,
}

impl DatePreset {
    pub const ALL: [DatePreset; 6] = [
        DatePreset::Today,
        DatePreset::Yesterday,
        DatePreset::Last7Days,
        DatePreset::Last30Days,
        DatePreset::Last90Days,
        DatePreset::Last365Days,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::Last90Days => "Last 90 days",
            Self::Last365Days => "Last 365 days",
        }
    }

    /// The inclusive range this preset covers, relative to `today`.
    /// The "last N days" presets end yesterday.
    pub fn range(&self, today: NaiveDate) -> DateRange {
        let days_back = |n: u64| today.checked_sub_days(Days::new(n)).unwrap_or(today);
        let yesterday = days_back(1);
        let (from, to) = match self {
            Self::Today => (today, today),
            Self::Yesterday => (yesterday, yesterday),
            Self::Last7Days => (days_back(7), yesterday),
            Self::Last30Days => (days_back(30), yesterday),
            Self::Last90Days => (days_back(90), yesterday),
            Self::Last365Days => (days_back(365), yesterday),
        };
        DateRange::new(Some(from), Some(to))
    }

    /// The preset whose range equals `range`, if any ("Custom" otherwise).
    pub fn matching(range: &DateRange, today: NaiveDate) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.range(today) == *range)
    }
}
