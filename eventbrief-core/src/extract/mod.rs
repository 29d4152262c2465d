//! Event discovery in generated briefs.
//!
//! Two independent parsers feed the same record type:
//! - a pipe table under the `## Upcoming Events` heading
//! - bullet lines tagged with `**[EVENT]**`, attributed to the nearest `## ` heading
//!
//! Results are merged table-first and deduplicated by case-insensitive title.

mod table;
mod tagged;

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::event::EventRecord;

pub use table::extract_table_events;
pub use tagged::extract_tagged_events;

pub const DEFAULT_TAG: &str = "EVENT";

/// Markdown hyperlink `[label](url)`.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid regex"));

/// Find the first markdown link in `text`, returning `(label, url)`.
fn find_link(text: &str) -> Option<(&str, &str)> {
    let caps = LINK_PATTERN.captures(text)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Trim the separator characters briefs put between fields.
fn trim_separators(s: &str) -> &str {
    s.trim_matches(|c| matches!(c, ' ' | '-' | ','))
}

/// Extract all events using the default `EVENT` tag.
pub fn extract_events(text: &str) -> Vec<EventRecord> {
    extract_events_with_tag(text, DEFAULT_TAG)
}

/// Extract table and tagged events, keeping the first record for each title.
pub fn extract_events_with_tag(text: &str, tag: &str) -> Vec<EventRecord> {
    let table_events = extract_table_events(text);
    let tagged_events = extract_tagged_events(text, tag);
    let (table_count, tagged_count) = (table_events.len(), tagged_events.len());

    let events = dedupe_by_title(table_events.into_iter().chain(tagged_events));

    tracing::info!(
        table = table_count,
        tagged = tagged_count,
        "Extracted {} events",
        events.len()
    );
    events
}

fn dedupe_by_title(events: impl IntoIterator<Item = EventRecord>) -> Vec<EventRecord> {
    let mut seen = HashSet::new();
    events
        .into_iter()
        .filter(|event| seen.insert(event.title.to_lowercase()))
        .collect()
}

#[cfg(test)]
pub(crate) const SAMPLE_BRIEF: &str = "# Central Illinois ESO Media Brief

## Upcoming Events

| Date | Event | Organization | Location | Details |
|------|-------|-------------|----------|---------|
| Feb 18, 2026 | [AgTech Connect](https://instagram.com/p/123/) | Greater Peoria EDC | USDA Ag Lab, Peoria | 10:00-11:30 AM |
| Feb 18, 2026 | [Credit Game Workshop](https://instagram.com/p/456/) | MBDC | MBDC Office | 6:00-8:00 PM |
| Mar 18, 2026 | [Fail Club: Christell Frausto](https://facebook.com/events/789/) | Distillery Labs | 201 SW Adams St | 4:30-6:00 PM |

---

## Greater Peoria EDC

- **[EVENT]** [AgTech Connect](https://instagram.com/p/123/) - Feb 18, 10:00 AM at USDA Ag Lab

## Distillery Labs

- **[EVENT]** [Fail Club: Christell Frausto](https://facebook.com/events/789/) - March 18th, 4:30 PM at Distillery Labs Main Lobby
- **[PROMOTIONAL]** Check out our new website!
";
