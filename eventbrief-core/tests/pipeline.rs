//! End-to-end: search text -> filtered text -> records -> invite.

use chrono::NaiveDate;
use eventbrief_core::ics::generate_invite_at;
use eventbrief_core::{
    CalendarEventSpec, EventRecord, extract_events, filter_past, format_events_for_prompt,
    parse_datetime_flexible,
};

const BRIEF: &str = "# Weekly Founder Brief

## Upcoming Events

| Date | Event | Organization | Location | Details |
|------|-------|-------------|----------|---------|
| 2025-11-02 | [Fall Showcase](https://hub.example/fall) | Startup Hub | Main Hall | 5:00 PM |
| 2026-02-04 | [Office Hours](https://hub.example/oh) | Startup Hub | Room 2 | 9:00 AM |
| Mar 18, 2026 | Fail Club | Distillery Labs | 201 SW Adams St | 4:30-6:00 PM |

---

## Distillery Labs

- **[EVENT]** Fail Club - March 18th, 4:30 PM at Main Lobby
- **[EVENT]** [Demo Night](https://labs.example/demo) - Apr 9, 6:00 PM at Garage
";

fn today() -> &'static str {
    "2026-02-04"
}

#[test]
fn test_filtering_before_extraction_drops_past_rows() {
    let filtered = filter_past(Some(BRIEF), today()).unwrap();
    let events = extract_events(&filtered);

    let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Office Hours", "Fail Club", "Demo Night"]);

    let fail_club = &events[1];
    assert_eq!(fail_club.organization, "Distillery Labs");
    assert_eq!(fail_club.location, "201 SW Adams St");

    let demo = &events[2];
    assert_eq!(demo.original_link, "https://labs.example/demo");
    assert_eq!(demo.date, "Apr 9");
    assert_eq!(demo.time, "6:00 PM");
    assert_eq!(demo.location, "Garage");
}

#[test]
fn test_upcoming_check_on_records_matches_line_filter() {
    let reference = NaiveDate::from_ymd_opt(2026, 2, 4).unwrap();
    let upcoming: Vec<EventRecord> = extract_events(BRIEF)
        .into_iter()
        .filter(|e| e.is_upcoming(reference))
        .collect();

    assert!(upcoming.iter().all(|e| e.title != "Fall Showcase"));
    assert!(upcoming.iter().any(|e| e.title == "Office Hours"));
}

#[test]
fn test_record_to_invite() {
    let events = extract_events(BRIEF);
    let demo = events.iter().find(|e| e.title == "Demo Night").unwrap();
    let start = parse_datetime_flexible("2026-04-09T18:00").unwrap();

    let spec = CalendarEventSpec::from_record(demo, start);
    let stamp = chrono::DateTime::from_timestamp(1_767_225_600, 0).unwrap();
    let ics = generate_invite_at(&spec, stamp);

    assert!(ics.contains("SUMMARY:Demo Night"), "ICS:\n{ics}");
    assert!(ics.contains("DTSTART:20260409T180000Z"), "ICS:\n{ics}");
    assert!(ics.contains("DTEND:20260409T190000Z"), "ICS:\n{ics}");
    assert!(ics.contains("DTSTAMP:20260101T000000Z"), "ICS:\n{ics}");
    assert!(ics.contains("URL:https://labs.example/demo"), "ICS:\n{ics}");
    assert!(ics.contains("LOCATION:Garage"), "ICS:\n{ics}");
    assert!(!ics.contains("ORGANIZER"), "ICS:\n{ics}");

    // Re-serializing the same spec keeps its identity
    let again = generate_invite_at(&spec, stamp);
    assert_eq!(ics, again);
}

#[test]
fn test_prompt_lists_every_record() {
    let events = extract_events(BRIEF);
    let prompt = format_events_for_prompt(&events);
    assert_eq!(prompt.lines().count(), events.len());
    assert!(prompt.starts_with("Fall Showcase | Date: 2025-11-02"));
}

#[test]
fn test_calls_are_independent_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let filtered = filter_past(Some(BRIEF), today()).unwrap();
                extract_events(&filtered).len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
}
