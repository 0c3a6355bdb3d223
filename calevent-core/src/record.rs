//! Derivation of render-ready event records from caller input.

use chrono::{DateTime, Utc};

use crate::constants::DEFAULT_SUMMARY;
use crate::error::CalEventResult;
use crate::event::{AttendeeInput, EventInput, OrganizerInput};
use crate::time::{EventTimes, format_stamp};

/// A fully derived event, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub dtstamp: String,
    pub dtstart: String,
    pub dtend: String,
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub organizer: Option<Organizer>,
    pub attendees: Option<Vec<Attendee>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Organizer {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attendee {
    pub name: String,
    pub email: String,
    pub rsvp: bool,
}

impl EventRecord {
    /// Derive a record from one input event, using `now` for missing times.
    pub fn derive(input: &EventInput, now: DateTime<Utc>) -> CalEventResult<Self> {
        let times = EventTimes::resolve(input, now)?;

        Ok(EventRecord {
            dtstamp: format_stamp(&times.dtstamp),
            dtstart: format_stamp(&times.dtstart),
            dtend: format_stamp(&times.dtend),
            summary: non_empty(input.event_name.as_deref())
                .unwrap_or(DEFAULT_SUMMARY)
                .to_string(),
            description: non_empty(input.description.as_deref()).map(str::to_string),
            location: non_empty(input.location.as_deref()).map(str::to_string),
            organizer: input.organizer.as_ref().and_then(organizer),
            attendees: input.attendees.as_deref().and_then(attendees),
        })
    }
}

/// Derive records for every event, failing on the first invalid one.
pub fn derive_records(
    inputs: &[&EventInput],
    now: DateTime<Utc>,
) -> CalEventResult<Vec<EventRecord>> {
    inputs
        .iter()
        .map(|input| EventRecord::derive(input, now))
        .collect()
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// An organizer needs both a name and an email.
fn organizer(input: &OrganizerInput) -> Option<Organizer> {
    let name = non_empty(input.name.as_deref())?;
    let email = non_empty(input.email.as_deref())?;

    Some(Organizer {
        name: name.to_string(),
        email: email.to_string(),
    })
}

/// Keep the attendee list only if its first entry has a name and an email.
///
/// Later entries are not checked; missing fields on them render empty.
fn attendees(input: &[AttendeeInput]) -> Option<Vec<Attendee>> {
    let first = input.first()?;
    if non_empty(first.name.as_deref()).is_none() || non_empty(first.email.as_deref()).is_none() {
        tracing::warn!(
            count = input.len(),
            "First attendee lacks a name or email, dropping all attendees"
        );
        return None;
    }

    Some(
        input
            .iter()
            .map(|a| Attendee {
                name: a.name.clone().unwrap_or_default(),
                email: a.email.clone().unwrap_or_default(),
                rsvp: a.rsvp.unwrap_or(false),
            })
            .collect(),
    )
}
