//! ICS text generation.

use crate::constants::LINE_ENDING;
use crate::record::{Attendee, EventRecord, Organizer};

/// Render records into a single VCALENDAR document.
///
/// Values are written verbatim; no escaping or line folding is applied.
pub fn generate_ics(records: &[EventRecord]) -> String {
    let mut lines: Vec<String> = vec!["BEGIN:VCALENDAR".into(), "VERSION:2.0".into()];

    for record in records {
        push_event(&mut lines, record);
    }

    lines.push("END:VCALENDAR".into());
    lines.join(LINE_ENDING)
}

/// Property order is fixed: DTSTAMP, ORGANIZER, ATTENDEE*, DTSTART, DTEND,
/// LOCATION, DESCRIPTION, SUMMARY.
fn push_event(lines: &mut Vec<String>, record: &EventRecord) {
    lines.push("BEGIN:VEVENT".into());
    lines.push(format!("DTSTAMP:{}", record.dtstamp));

    if let Some(ref organizer) = record.organizer {
        lines.push(organizer_line(organizer));
    }

    if let Some(ref attendees) = record.attendees {
        lines.extend(attendees.iter().map(attendee_line));
    }

    lines.push(format!("DTSTART:{}", record.dtstart));
    lines.push(format!("DTEND:{}", record.dtend));

    if let Some(ref location) = record.location {
        lines.push(format!("LOCATION:{}", location));
    }

    if let Some(ref description) = record.description {
        lines.push(format!("DESCRIPTION:{}", description));
    }

    lines.push(format!("SUMMARY:{}", record.summary));
    lines.push("END:VEVENT".into());
}

fn organizer_line(organizer: &Organizer) -> String {
    format!("ORGANIZER;CN={}:MAILTO:{}", organizer.name, organizer.email)
}

fn attendee_line(attendee: &Attendee) -> String {
    let rsvp = if attendee.rsvp { "TRUE" } else { "FALSE" };
    format!(
        "ATTENDEE;CN=\"{}\";RSVP={}:mailto:{}",
        attendee.name, rsvp, attendee.email
    )
}
