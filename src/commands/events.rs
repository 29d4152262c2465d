use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use eventbrief_core::{EventRecord, extract_events_with_tag, format_events_for_prompt};
use owo_colors::OwoColorize;

use crate::input::read_input;

/// How extracted records are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    List,
    Json,
    Prompt,
}

pub fn run(
    file: Option<&Path>,
    tag: &str,
    upcoming_from: Option<NaiveDate>,
    format: Format,
) -> Result<()> {
    let text = read_input(file)?;
    let events = select(extract_events_with_tag(&text, tag), upcoming_from);

    match format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&events).context("Could not encode events")?;
            println!("{json}");
        }
        Format::Prompt => println!("{}", format_events_for_prompt(&events)),
        Format::List => print_list(&events),
    }
    Ok(())
}

fn select(events: Vec<EventRecord>, upcoming_from: Option<NaiveDate>) -> Vec<EventRecord> {
    match upcoming_from {
        Some(reference) => events
            .into_iter()
            .filter(|e| e.is_upcoming(reference))
            .collect(),
        None => events,
    }
}

fn print_list(events: &[EventRecord]) {
    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return;
    }

    for event in events {
        println!("{}", event.title.bold());

        let when = [event.date.as_str(), event.time.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if !when.is_empty() {
            println!("  {when}");
        }
        if !event.location.is_empty() {
            println!("  {}", event.location);
        }
        if !event.display_organization().is_empty() {
            println!("  {}", event.display_organization().dimmed());
        }
        if !event.original_link.is_empty() {
            println!("  {}", event.original_link.underline());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upcoming_selection_keeps_undated_records() {
        let events = vec![
            EventRecord::new("Old", "2025-01-01", "", "", "", ""),
            EventRecord::new("Today", "Feb 4, 2026", "", "", "", ""),
            EventRecord::new("Someday", "TBD", "", "", "", ""),
        ];
        let reference = NaiveDate::from_ymd_opt(2026, 2, 4).unwrap();

        let titles: Vec<_> = select(events.clone(), Some(reference))
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, ["Today", "Someday"]);
        assert_eq!(select(events, None).len(), 3);
    }
}
