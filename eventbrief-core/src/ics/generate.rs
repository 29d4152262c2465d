//! ICS text generation.

use chrono::{DateTime, NaiveDateTime, Utc};
use icalendar::{Calendar, Component, EventLike, Property};

use super::invite::CalendarEventSpec;

const PRODID: &str = "-//Eventbrief//Calendar//EN";

/// Generate the .ics document for `spec`, stamped with the current time.
pub fn generate_invite(spec: &CalendarEventSpec) -> String {
    generate_invite_at(spec, Utc::now())
}

/// Generate the .ics document for `spec` with an explicit DTSTAMP.
pub fn generate_invite_at(spec: &CalendarEventSpec, dtstamp: DateTime<Utc>) -> String {
    let mut cal = Calendar::new();
    cal.append_property(Property::new("METHOD", "PUBLISH"));

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&spec.uid);
    ics_event.summary(&spec.title);

    ics_event.add_property("DTSTART", format_utc(&spec.start));
    ics_event.add_property("DTEND", format_utc(&end_time(spec)));
    ics_event.add_property("DTSTAMP", format_utc(&dtstamp.naive_utc()));

    // Optional fields
    if !spec.description.is_empty() {
        ics_event.description(&spec.description);
    }

    if !spec.location.is_empty() {
        ics_event.location(&spec.location);
    }

    if !spec.url.is_empty() {
        ics_event.add_property("URL", &spec.url);
    }

    if !spec.organizer_email.is_empty() {
        let mut prop = Property::new("ORGANIZER", format!("mailto:{}", spec.organizer_email));
        if !spec.organizer_name.is_empty() {
            prop.add_parameter("CN", &spec.organizer_name);
        }
        ics_event.append_property(prop);
    }

    ics_event.add_property("STATUS", "CONFIRMED");

    let ics_event = ics_event.done();
    cal.push(ics_event);
    let cal = cal.done();

    strip_ics_bloat(&cal.to_string())
}

/// End of the event, or its start when the duration cannot be represented.
fn end_time(spec: &CalendarEventSpec) -> NaiveDateTime {
    spec.end().unwrap_or_else(|| {
        tracing::warn!(
            uid = %spec.uid,
            duration_hours = spec.duration_hours,
            "Invite duration out of range, ending at start"
        );
        spec.start
    })
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with ours
/// - Write CALSCALE exactly once, right after PRODID
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
            result.push_str("\r\nCALSCALE:GREGORIAN\r\n");
            continue;
        }

        if line.starts_with("CALSCALE:") {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

/// Format a naive UTC-equivalent datetime as `YYYYMMDDThhmmssZ`.
pub fn format_utc(dt: &NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}
