//! Pipe-table events under the `## Upcoming Events` heading.
//!
//! Expected shape:
//!
//! ```text
//! | Date | Event | Organization | Location | Details |
//! |------|-------|--------------|----------|---------|
//! | Feb 18 | [AgTech Connect](url) | GPEDC | USDA Ag Lab | 10:00 AM |
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::find_link;
use crate::event::EventRecord;

static SECTION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"## Upcoming Events\s*\n").expect("Invalid regex"));

/// Markers that close the table section.
const SECTION_END_MARKERS: [&str; 2] = ["\n---", "\n## "];

const MIN_COLUMNS: usize = 4;

/// Extract one record per data row of the upcoming-events table.
pub fn extract_table_events(text: &str) -> Vec<EventRecord> {
    let Some(section) = table_section(text) else {
        return Vec::new();
    };

    section.trim().lines().filter_map(parse_row).collect()
}

/// Body of the table section, up to the next rule, heading or end of text.
fn table_section(text: &str) -> Option<&str> {
    let heading = SECTION_HEADING.find(text)?;
    let body = &text[heading.end()..];

    let end = SECTION_END_MARKERS
        .iter()
        .filter_map(|marker| body.find(marker))
        .min()
        .unwrap_or(body.len());

    Some(&body[..end])
}

/// Parse a single `| date | event | org | location | details |` row.
fn parse_row(row: &str) -> Option<EventRecord> {
    let row = row.trim();
    if !row.contains('|') || row.contains("---") {
        return None;
    }

    let inner = row.strip_prefix('|').unwrap_or(row);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    let cells: Vec<&str> = inner.split('|').map(str::trim).collect();
    if cells.len() < MIN_COLUMNS {
        return None;
    }

    let date = cells[0];
    if matches!(date.to_lowercase().as_str(), "date" | "dates") {
        return None;
    }

    let (title, link) = find_link(cells[1]).unwrap_or((cells[1], ""));
    if title.is_empty() {
        return None;
    }

    let organization = cells[2];
    let location = cells[3];
    let details = cells.get(4).copied().unwrap_or_default();

    Some(EventRecord::new(
        title,
        date,
        details,
        location,
        organization,
        link,
    ))
}
