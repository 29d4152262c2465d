//! Calendar invite (.ics) generation.
//!
//! Produces single-event RFC 5545 documents suitable for attaching to an
//! email or importing into a calendar application.

mod generate;
mod invite;

pub use generate::{format_utc, generate_invite, generate_invite_at};
pub use invite::{CalendarEventSpec, CalendarEventSpecBuilder, DEFAULT_UID_DOMAIN};
