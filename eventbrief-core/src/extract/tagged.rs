//! Tagged bullet events, e.g.
//! `- **[EVENT]** [Title](url) - March 15th, 5:00 PM at Location`.
//!
//! The organization of each event is the text of the most recent `## `
//! heading above it.

use std::sync::LazyLock;

use regex::Regex;

use super::{find_link, trim_separators};
use crate::event::EventRecord;

static LINK_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\([^)]+\)").expect("Invalid regex"));

static LOCATION_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bat\b\s+(.+)").expect("Invalid regex"));

static TIME_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{1,2}:[0-9]{2}\s*(?:AM|PM))").expect("Invalid regex")
});

/// Scan state threaded through the lines of a document.
#[derive(Default)]
struct Scan {
    section: String,
    events: Vec<EventRecord>,
}

/// Extract events from lines carrying the `**[tag]**` marker.
pub fn extract_tagged_events(text: &str, tag: &str) -> Vec<EventRecord> {
    let marker = format!("**[{tag}]**");
    let title_pattern = match Regex::new(&format!(
        r"\*\*\[{}\]\*\*\s*(.+?)(?:\s*-\s*|$)",
        regex::escape(tag)
    )) {
        Ok(re) => re,
        Err(e) => {
            tracing::error!(tag, "Unusable event tag: {e}");
            return Vec::new();
        }
    };

    let scan = text.split('\n').fold(Scan::default(), |mut scan, line| {
        if let Some(heading) = line.strip_prefix("## ").filter(|h| !h.is_empty()) {
            scan.section = heading.trim().to_string();
            return scan;
        }

        if line.contains(&marker) {
            match parse_tagged_line(line, &title_pattern, &scan.section) {
                Some(event) => scan.events.push(event),
                None => tracing::trace!(line, "Tagged line without a title"),
            }
        }
        scan
    });

    scan.events
}

fn parse_tagged_line(line: &str, title_pattern: &Regex, section: &str) -> Option<EventRecord> {
    let (title, link) = match find_link(line) {
        Some((label, url)) => (label, url),
        None => {
            let caps = title_pattern.captures(line)?;
            (caps.get(1)?.as_str().trim(), "")
        }
    };
    if title.is_empty() {
        return None;
    }

    let remainder = line.split_once(title).map_or("", |(_, rest)| rest);
    let remainder = LINK_TAIL.replace_all(remainder, "");
    let mut remainder = trim_separators(&remainder).to_string();

    let clause = LOCATION_CLAUSE
        .captures(&remainder)
        .and_then(|caps| Some((caps.get(0)?.start(), caps.get(1)?.as_str().trim().to_string())));

    let mut location = String::new();
    if let Some((start, found)) = clause {
        location = found;
        remainder = trim_separators(&remainder[..start]).to_string();
    }

    let mut time = String::new();
    if let Some(m) = TIME_TOKEN.find(&remainder) {
        time = m.as_str().to_string();
        remainder = trim_separators(&remainder.replace(&time, "")).to_string();
    }

    let date = trim_separators(&remainder);

    Some(EventRecord::new(title, date, time, location, section, link))
}
