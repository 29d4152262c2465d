//! Extracted event records.
//!
//! Every field is a plain string so a record serializes to the flat mapping
//! downstream stores and prompts expect. An empty string means "not found".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::{CalendarDate, extract_dates};

pub const DEFAULT_EVENT_TYPE: &str = "event";

fn default_event_type() -> String {
    DEFAULT_EVENT_TYPE.to_string()
}

/// One event mention discovered in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    /// Date exactly as written in the source ("Feb 18, 2026", "March 18th")
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub organization_full: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub original_link: String,
    #[serde(default = "default_event_type")]
    pub event_type: String,
}

impl EventRecord {
    /// Build a record, deriving `organization_full` and `description`
    /// from the organization.
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        location: impl Into<String>,
        organization: impl Into<String>,
        original_link: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let organization = organization.into();
        let description = if organization.is_empty() {
            title.clone()
        } else {
            format!("{title} hosted by {organization}")
        };

        EventRecord {
            title,
            date: date.into(),
            time: time.into(),
            location: location.into(),
            organization_full: organization.clone(),
            organization,
            description,
            original_link: original_link.into(),
            event_type: default_event_type(),
        }
    }

    /// First date recognizable in the raw `date` field, if any.
    pub fn calendar_date(&self) -> Option<CalendarDate> {
        extract_dates(&self.date).into_iter().next()
    }

    /// Whether the event is on or after `reference`. Records whose date
    /// can't be parsed count as upcoming.
    pub fn is_upcoming(&self, reference: NaiveDate) -> bool {
        self.calendar_date()
            .is_none_or(|date| !date.is_before(reference))
    }

    /// Organization shown to users, preferring the full name.
    pub fn display_organization(&self) -> &str {
        if self.organization_full.is_empty() {
            &self.organization
        } else {
            &self.organization_full
        }
    }
}
