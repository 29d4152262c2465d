pub mod config;
pub mod dates;
pub mod events;
pub mod filter;
pub mod invite;

use anyhow::Result;
use chrono::NaiveDate;
use eventbrief_core::ReferenceDate;

/// Parse `--today`, falling back to the local current date.
pub fn reference_date(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(s) => Ok(ReferenceDate::parse(s)?),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
