//! The event description an invite is generated from.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::{EventbriefError, EventbriefResult};
use crate::event::EventRecord;

pub const DEFAULT_UID_DOMAIN: &str = "eventbrief";
const DEFAULT_DURATION_HOURS: f64 = 1.0;

fn new_uid(domain: &str) -> String {
    format!("{}@{domain}", uuid::Uuid::new_v4())
}

/// One schedulable event.
///
/// `start` is a naive wall-clock time that is written out as UTC unchanged.
/// The `uid` is minted once at construction; reuse the same spec to re-send
/// an invite that calendars should treat as the same event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEventSpec {
    pub title: String,
    pub start: NaiveDateTime,
    pub description: String,
    pub location: String,
    pub url: String,
    pub duration_hours: f64,
    pub organizer_name: String,
    pub organizer_email: String,
    pub uid: String,
}

impl CalendarEventSpec {
    /// A one-hour event with a fresh uid and no optional fields.
    pub fn new(title: impl Into<String>, start: NaiveDateTime) -> Self {
        CalendarEventSpec {
            uid: new_uid(DEFAULT_UID_DOMAIN),
            ..Self::without_uid(title.into(), start)
        }
    }

    fn without_uid(title: String, start: NaiveDateTime) -> Self {
        CalendarEventSpec {
            title,
            start,
            description: String::new(),
            location: String::new(),
            url: String::new(),
            duration_hours: DEFAULT_DURATION_HOURS,
            organizer_name: String::new(),
            organizer_email: String::new(),
            uid: String::new(),
        }
    }

    pub fn builder(title: impl Into<String>, start: NaiveDateTime) -> CalendarEventSpecBuilder {
        CalendarEventSpecBuilder {
            spec: Self::without_uid(title.into(), start),
            uid: None,
            uid_domain: None,
        }
    }

    /// `start + duration_hours`, rounded to whole seconds.
    ///
    /// `None` when the duration is not finite or the end falls outside the
    /// representable date range.
    pub fn end(&self) -> Option<NaiveDateTime> {
        let seconds = (self.duration_hours * 3600.0).round();
        if !seconds.is_finite() || seconds.abs() >= i64::MAX as f64 {
            return None;
        }
        let duration = TimeDelta::try_seconds(seconds as i64)?;
        self.start.checked_add_signed(duration)
    }

    /// Turn an extracted record into an invite spec starting at `start`.
    ///
    /// The record's link becomes the URL and its organization the organizer
    /// display name. No organizer email is known, so no ORGANIZER line will
    /// be written unless the caller sets one.
    pub fn from_record(record: &EventRecord, start: NaiveDateTime) -> Self {
        CalendarEventSpec {
            description: record.description.clone(),
            location: record.location.clone(),
            url: record.original_link.clone(),
            organizer_name: record.display_organization().to_string(),
            ..CalendarEventSpec::new(record.title.clone(), start)
        }
    }
}

/// Validating builder for [`CalendarEventSpec`].
#[derive(Debug, Clone)]
pub struct CalendarEventSpecBuilder {
    spec: CalendarEventSpec,
    uid: Option<String>,
    uid_domain: Option<String>,
}

impl CalendarEventSpecBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.spec.description = description.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.spec.location = location.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.spec.url = url.into();
        self
    }

    pub fn duration_hours(mut self, hours: f64) -> Self {
        self.spec.duration_hours = hours;
        self
    }

    pub fn organizer(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.spec.organizer_name = name.into();
        self.spec.organizer_email = email.into();
        self
    }

    /// Use an explicit uid instead of generating one.
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Domain suffix for a generated uid. Ignored when `uid` is set.
    pub fn uid_domain(mut self, domain: impl Into<String>) -> Self {
        self.uid_domain = Some(domain.into());
        self
    }

    pub fn build(self) -> EventbriefResult<CalendarEventSpec> {
        let mut spec = self.spec;

        if spec.title.trim().is_empty() {
            return Err(EventbriefError::InvalidInvite("title is empty".into()));
        }
        if !spec.duration_hours.is_finite() || spec.duration_hours < 0.0 {
            return Err(EventbriefError::InvalidInvite(format!(
                "duration must be a non-negative number of hours, got {}",
                spec.duration_hours
            )));
        }

        if spec.end().is_none() {
            return Err(EventbriefError::InvalidInvite(format!(
                "a duration of {} hours ends past the supported date range",
                spec.duration_hours
            )));
        }

        spec.uid = match (self.uid, self.uid_domain) {
            (Some(uid), _) if uid.trim().is_empty() => {
                return Err(EventbriefError::InvalidInvite("uid is empty".into()));
            }
            (Some(uid), _) => uid,
            (None, domain) => new_uid(domain.as_deref().unwrap_or(DEFAULT_UID_DOMAIN)),
        };

        Ok(spec)
    }
}
