//! Render event records as plain context for a chat agent prompt.

use crate::event::EventRecord;

/// One `|`-separated line per event; empty fields are left out.
pub fn format_events_for_prompt(events: &[EventRecord]) -> String {
    events
        .iter()
        .map(format_event)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_event(event: &EventRecord) -> String {
    let title = if event.title.is_empty() {
        "Untitled"
    } else {
        &event.title
    };

    let labelled = [
        ("Date", event.date.as_str()),
        ("Time", event.time.as_str()),
        ("Org", event.display_organization()),
        ("Location", event.location.as_str()),
        ("Link", event.original_link.as_str()),
        ("Description", event.description.as_str()),
    ];

    std::iter::once(title.to_string())
        .chain(
            labelled
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(label, value)| format!("{label}: {value}")),
        )
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_renders_nothing() {
        assert_eq!(format_events_for_prompt(&[]), "");
    }

    #[test]
    fn test_renders_populated_fields_in_order() {
        let event = EventRecord::new(
            "AgTech Connect",
            "Feb 18, 2026",
            "10:00 AM",
            "USDA Ag Lab",
            "GPEDC",
            "https://x/1",
        );
        assert_eq!(
            format_events_for_prompt(&[event]),
            "AgTech Connect | Date: Feb 18, 2026 | Time: 10:00 AM | Org: GPEDC | \
             Location: USDA Ag Lab | Link: https://x/1 | Description: AgTech Connect hosted by GPEDC"
        );
    }

    #[test]
    fn test_sparse_records_and_fallbacks() {
        let mut untitled = EventRecord::new("", "", "", "", "Hub", "");
        untitled.organization_full = String::new();
        untitled.description = String::new();
        let plain = EventRecord::new("Mixer", "", "", "", "", "");

        assert_eq!(
            format_events_for_prompt(&[untitled, plain]),
            "Untitled | Org: Hub\nMixer | Description: Mixer"
        );
    }
}
