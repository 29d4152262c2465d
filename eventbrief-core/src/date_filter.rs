//! Removal of past-dated lines from search results and scraped text.
//!
//! A line is dropped as a whole if any date in it falls strictly before the
//! reference date. Lines without dates always survive, and so do events on
//! the reference day itself.

use chrono::NaiveDate;

use crate::dates::{ReferenceDate, extract_dates};

/// Result of filtering text against a known reference date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub text: String,
    pub lines_in: usize,
    pub lines_removed: usize,
}

/// Filter out lines containing past dates.
///
/// `None` stays `None` and an empty string is returned as-is. When
/// `reference_date` is not a valid `YYYY-MM-DD` value the error is logged and
/// the text comes back unfiltered.
pub fn filter_past(text: Option<&str>, reference_date: &str) -> Option<String> {
    let text = text?;
    if text.is_empty() {
        return Some(String::new());
    }

    let reference = match ReferenceDate::parse(reference_date) {
        Ok(date) => date,
        Err(e) => {
            tracing::error!(reference_date, "{e}; skipping date filtering");
            return Some(text.to_string());
        }
    };

    Some(filter_past_on(text, reference).text)
}

/// Filter `text` against an already parsed reference date.
pub fn filter_past_on(text: &str, reference: NaiveDate) -> FilterOutcome {
    let mut lines_in = 0;
    let kept: Vec<&str> = text
        .split('\n')
        .inspect(|_| lines_in += 1)
        .filter(|line| {
            let past = extract_dates(line).iter().any(|d| d.is_before(reference));
            if past {
                tracing::debug!(line = %preview(line), "Filtering past event");
            }
            !past
        })
        .collect();

    let lines_removed = lines_in - kept.len();
    if lines_removed > 0 {
        tracing::info!(
            lines_in,
            lines_out = kept.len(),
            "Date filtering removed {lines_removed} line(s)"
        );
    }

    FilterOutcome {
        text: kept.join("\n"),
        lines_in,
        lines_removed,
    }
}

fn preview(line: &str) -> String {
    line.chars().take(80).collect()
}
