//! Core of eventbrief: finding events in research briefs and search results.
//!
//! This crate provides:
//! - `dates` for recognizing calendar dates in free text
//! - `date_filter` for dropping lines about events that already happened
//! - `extract` for turning briefs into deduplicated `EventRecord`s
//! - `ics` for serializing one event into an RFC 5545 invite
//!
//! All of these are pure functions over their input; logging goes through
//! `tracing` and no subscriber is installed here.

pub mod config;
pub mod date_filter;
pub mod dates;
pub mod error;
pub mod event;
pub mod extract;
pub mod ics;
pub mod prompt;

pub use date_filter::{FilterOutcome, filter_past, filter_past_on};
pub use dates::{CalendarDate, ReferenceDate, extract_dates, parse_datetime_flexible};
pub use error::{EventbriefError, EventbriefResult};
pub use event::EventRecord;
pub use extract::{extract_events, extract_events_with_tag};
pub use ics::{CalendarEventSpec, generate_invite};
pub use prompt::format_events_for_prompt;
