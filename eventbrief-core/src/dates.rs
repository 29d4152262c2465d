//! Calendar date recognition in free text.
//!
//! Two lexical forms are recognized, each by its own pass over the text:
//! - ISO numeric: `2026-03-20` (month and day may be a single digit)
//! - Month name: `March 20, 2026`, `Mar 20 2026` (case-insensitive)
//!
//! Matches that do not form a valid Gregorian date are dropped.

use std::fmt;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{EventbriefError, EventbriefResult};

// Not anchored to word boundaries: a date-shaped run inside a longer number still matches.
static ISO_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})").expect("Invalid regex")
});

static MONTH_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+([0-9]{1,2}),?\s+([0-9]{4})",
    )
    .expect("Invalid regex")
});

static TRAILING_OFFSET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+-][0-9]{2}:[0-9]{2}$").expect("Invalid regex"));

const MONTHS: [(&str, &str); 12] = [
    ("january", "jan"),
    ("february", "feb"),
    ("march", "mar"),
    ("april", "apr"),
    ("may", "may"),
    ("june", "jun"),
    ("july", "jul"),
    ("august", "aug"),
    ("september", "sep"),
    ("october", "oct"),
    ("november", "nov"),
    ("december", "dec"),
];

/// Formats tried in order by [`parse_datetime_flexible`].
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];

/// A validated calendar date, optionally with a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    date: NaiveDate,
    time: Option<NaiveTime>,
}

impl CalendarDate {
    /// Build a date from its parts. Returns `None` for anything that is not a
    /// real Gregorian date (month 13, Feb 30, day 31 in a 30-day month, year 0).
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if year < 1 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    pub fn with_time(self, time: NaiveTime) -> Self {
        CalendarDate {
            time: Some(time),
            ..self
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    /// Whether this date falls strictly before `reference`, ignoring time of day.
    pub fn is_before(&self, reference: NaiveDate) -> bool {
        self.date < reference
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate { date, time: None }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))?;
        if let Some(time) = self.time {
            write!(f, " {}", time.format("%H:%M"))?;
        }
        Ok(())
    }
}

/// Map a full or three-letter English month name to its number (1-12).
pub fn month_from_name(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    MONTHS
        .iter()
        .position(|(full, short)| name == *full || name == *short)
        .map(|idx| idx as u32 + 1)
}

/// Extract every recognizable date from `text`.
///
/// ISO matches come first, then month-name matches, each in the order found.
/// Invalid dates (e.g. `2026-13-01`, `Feb 30, 2026`) contribute nothing.
pub fn extract_dates(text: &str) -> Vec<CalendarDate> {
    let iso = ISO_DATE_PATTERN.captures_iter(text).filter_map(|caps| {
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        CalendarDate::new(year, month, day)
    });

    let named = MONTH_NAME_PATTERN.captures_iter(text).filter_map(|caps| {
        let month = month_from_name(&caps[1])?;
        let day = caps[2].parse().ok()?;
        let year = caps[3].parse().ok()?;
        CalendarDate::new(year, month, day)
    });

    iso.chain(named).collect()
}

/// The "today" a filter compares against, always given as `YYYY-MM-DD`.
pub struct ReferenceDate;

impl ReferenceDate {
    /// Strictly parse a `YYYY-MM-DD` reference date.
    pub fn parse(s: &str) -> EventbriefResult<NaiveDate> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| EventbriefError::InvalidDate(s.to_string()))
    }
}

/// Parse a date or datetime string in one of the common formats.
///
/// A trailing UTC offset (`-06:00`) is dropped rather than applied; the
/// result is a naive wall-clock value. Date-only inputs land on midnight.
pub fn parse_datetime_flexible(s: &str) -> Option<NaiveDateTime> {
    let trimmed = TRAILING_OFFSET_PATTERN.replace(s.trim(), "");

    let parsed = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&trimmed, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(&trimmed, fmt).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        });

    if parsed.is_none() {
        tracing::warn!(input = s, "Could not parse datetime");
    }
    parsed
}
