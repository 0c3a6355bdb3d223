//! Caller-supplied event options.
//!
//! These types mirror the JSON shape callers send: camelCase keys, every
//! field optional, and `events` given either as one object or as a list.
//! Nothing here is validated; see [`crate::record`] for derivation.

use serde::Deserialize;

use crate::error::{CalEventError, CalEventResult};

/// Top-level options for rendering or writing a document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventOptions {
    #[serde(default)]
    pub events: Option<Events>,

    /// Output filename, used by the writer only
    #[serde(default)]
    pub filename: Option<String>,
}

/// One event or a list of events.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Events {
    Many(Vec<EventInput>),
    One(Box<EventInput>),
}

/// A single event as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventInput {
    pub dtstamp: Option<DateInput>,
    pub dtstart: Option<DateInput>,
    pub dtend: Option<DateInput>,
    pub event_name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub organizer: Option<OrganizerInput>,
    pub attendees: Option<Vec<AttendeeInput>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrganizerInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AttendeeInput {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Whether a response is requested (RSVP)
    pub rsvp: Option<bool>,
}

/// A date-like value: an ISO-8601 style string or epoch milliseconds.
///
/// Non-integer numbers are kept so they can be reported as invalid dates
/// rather than failing the whole decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    EpochMillis(i64),
    FractionalMillis(f64),
    Text(String),
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

impl From<i64> for DateInput {
    fn from(ms: i64) -> Self {
        DateInput::EpochMillis(ms)
    }
}

impl std::fmt::Display for DateInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateInput::EpochMillis(ms) => write!(f, "{}", ms),
            DateInput::FractionalMillis(ms) => write!(f, "{}", ms),
            DateInput::Text(s) => f.write_str(s),
        }
    }
}

impl EventOptions {
    /// Options holding exactly one event.
    pub fn single(event: EventInput) -> Self {
        EventOptions {
            events: Some(Events::One(Box::new(event))),
            filename: None,
        }
    }

    /// Options holding an ordered list of events.
    pub fn many(events: Vec<EventInput>) -> Self {
        EventOptions {
            events: Some(Events::Many(events)),
            filename: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Parse options from their JSON form.
    pub fn from_json(json: &str) -> CalEventResult<Self> {
        serde_json::from_str(json).map_err(|e| CalEventError::Serialization(e.to_string()))
    }

    /// The events as an ordered slice-like list.
    ///
    /// Fails when `events` is missing or is an empty list.
    pub fn event_list(&self) -> CalEventResult<Vec<&EventInput>> {
        let events: Vec<&EventInput> = match &self.events {
            None => Vec::new(),
            Some(Events::One(event)) => vec![event.as_ref()],
            Some(Events::Many(events)) => events.iter().collect(),
        };

        if events.is_empty() {
            return Err(CalEventError::Validation("No events given".into()));
        }

        Ok(events)
    }
}
