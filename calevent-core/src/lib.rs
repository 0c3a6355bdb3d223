//! Render calendar event options into iCalendar (.ics) documents.
//!
//! The flow is a single pure transformation, `EventInput` -> `EventRecord` ->
//! document text, plus an optional write to disk:
//! - [`render_document`] returns the document
//! - [`write_event_file`] and [`write_event_file_async`] write it and return the path

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ics;
pub mod output;
pub mod record;
pub mod time;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

pub use error::{CalEventError, CalEventResult};
pub use event::{AttendeeInput, DateInput, EventInput, EventOptions, Events, OrganizerInput};
pub use record::EventRecord;

/// Render the options into a document, using the current time for defaults.
pub fn render_document(options: &EventOptions) -> CalEventResult<String> {
    render_document_at(options, Utc::now())
}

/// Render the options into a document, using `now` for defaulted times.
pub fn render_document_at(options: &EventOptions, now: DateTime<Utc>) -> CalEventResult<String> {
    let events = options.event_list()?;
    let records = record::derive_records(&events, now)?;
    tracing::debug!(events = records.len(), "Rendering calendar document");
    Ok(ics::generate_ics(&records))
}

/// Render and write the document, returning the path written.
///
/// See [`output::destination_path`] for how the path is chosen. The system
/// temp directory is used when no directory is given.
pub fn write_event_file(options: &EventOptions, directory: Option<&Path>) -> CalEventResult<PathBuf> {
    let (dest, content) = prepare_write(options, directory, &std::env::temp_dir())?;
    output::write_document(&dest, &content)
}

/// Async counterpart of [`write_event_file`].
pub async fn write_event_file_async(
    options: &EventOptions,
    directory: Option<&Path>,
) -> CalEventResult<PathBuf> {
    let (dest, content) = prepare_write(options, directory, &std::env::temp_dir())?;
    output::write_document_async(&dest, &content).await
}

/// Validate, render and pick a destination. Nothing touches the disk here.
fn prepare_write(
    options: &EventOptions,
    directory: Option<&Path>,
    temp_root: &Path,
) -> CalEventResult<(PathBuf, String)> {
    let content = render_document(options)?;
    let dest = output::destination_path(options.filename.as_deref(), directory, temp_root)?;
    tracing::debug!(path = %dest.display(), "Resolved event file destination");
    Ok((dest, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 20, 15, 42, 17).unwrap()
    }

    fn standup() -> EventInput {
        EventInput {
            event_name: Some("Standup".into()),
            dtstart: Some("2024-01-01T09:37:00Z".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_standup() {
        let ics = render_document_at(&EventOptions::many(vec![standup()]), now()).unwrap();

        assert!(ics.contains("\r\nSUMMARY:Standup\r\n"), "ICS:\n{}", ics);
        assert!(ics.contains("\r\nDTSTART:20240101T090000Z\r\n"), "ICS:\n{}", ics);
        assert!(ics.contains("\r\nDTEND:20240101T110000Z\r\n"), "ICS:\n{}", ics);
        assert!(ics.contains("\r\nDTSTAMP:20250320T150000Z\r\n"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_render_single_event_has_one_of_each_wrapper() {
        let ics = render_document(&EventOptions::single(standup())).unwrap();

        assert_eq!(ics.matches("BEGIN:VCALENDAR").count(), 1);
        assert_eq!(ics.matches("END:VCALENDAR").count(), 1);
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
        assert_eq!(ics.matches("END:VEVENT").count(), 1);
    }

    #[test]
    fn test_render_defaulted_times_are_hour_aligned() {
        let ics = render_document(&EventOptions::single(EventInput::default())).unwrap();

        for prop in ["DTSTAMP:", "DTSTART:", "DTEND:"] {
            let line = ics.lines().find(|l| l.starts_with(prop)).unwrap();
            let value = &line[prop.len()..];
            assert_eq!(value.len(), 16, "{}", line);
            assert!(value.ends_with("0000Z"), "{}", line);
        }
    }

    #[test]
    fn test_render_without_events_fails() {
        let err = render_document(&EventOptions::default()).unwrap_err();
        assert!(err.is_validation());

        let options = EventOptions::from_json("{}").unwrap();
        assert!(render_document(&options).unwrap_err().is_validation());
    }

    #[test]
    fn test_render_from_json_with_everything() {
        let options = EventOptions::from_json(
            r#"{
                "events": {
                    "eventName": "Launch",
                    "dtstamp": "2024-05-01T08:15:00Z",
                    "dtstart": "2024-05-02T10:30:00Z",
                    "dtend": "2024-05-02T12:45:00Z",
                    "location": "Hangar",
                    "description": "Bring snacks",
                    "organizer": {"name": "Ada", "email": "ada@example.com"},
                    "attendees": [
                        {"name": "Alice", "email": "alice@example.com", "rsvp": true},
                        {"name": "Bob", "email": "bob@example.com"}
                    ]
                }
            }"#,
        )
        .unwrap();

        let ics = render_document(&options).unwrap();
        let expected = [
            "BEGIN:VCALENDAR",
            "VERSION:2.0",
            "BEGIN:VEVENT",
            "DTSTAMP:20240501T080000Z",
            "ORGANIZER;CN=Ada:MAILTO:ada@example.com",
            "ATTENDEE;CN=\"Alice\";RSVP=TRUE:mailto:alice@example.com",
            "ATTENDEE;CN=\"Bob\";RSVP=FALSE:mailto:bob@example.com",
            "DTSTART:20240502T100000Z",
            "DTEND:20240502T120000Z",
            "LOCATION:Hangar",
            "DESCRIPTION:Bring snacks",
            "SUMMARY:Launch",
            "END:VEVENT",
            "END:VCALENDAR",
        ]
        .join("\r\n");
        assert_eq!(ics, expected);
    }

    #[test]
    fn test_render_shallow_attendee_check() {
        let options = EventOptions::from_json(
            r#"{"events": {"attendees": [
                {"name": "No Email"},
                {"name": "Bob", "email": "bob@example.com"}
            ]}}"#,
        )
        .unwrap();

        let ics = render_document(&options).unwrap();
        assert!(!ics.contains("ATTENDEE"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_render_missing_organizer_email() {
        let options =
            EventOptions::from_json(r#"{"events": {"organizer": {"name": "Ada"}}}"#).unwrap();
        let ics = render_document(&options).unwrap();
        assert!(!ics.contains("ORGANIZER"));
    }

    #[test]
    fn test_render_invalid_date_fails_before_output() {
        let options =
            EventOptions::from_json(r#"{"events": {"dtstart": "someday"}}"#).unwrap();
        let err = render_document(&options).unwrap_err();
        assert!(matches!(err, CalEventError::InvalidDate { field: "dtstart", .. }));
    }

    #[test]
    fn test_render_fractional_epoch_is_invalid_date() {
        let options =
            EventOptions::from_json(r#"{"events": {"dtstart": 1704099600000.0}}"#).unwrap();
        let err = render_document(&options).unwrap_err();
        assert!(matches!(err, CalEventError::InvalidDate { field: "dtstart", .. }));
    }

    #[test]
    fn test_prepare_write_rejects_absolute_filename() {
        let temp = tempfile::tempdir().unwrap();
        let options = EventOptions::single(standup()).with_filename("/etc/evil.ics");

        let err = prepare_write(&options, Some(temp.path()), temp.path()).unwrap_err();
        assert!(err.is_validation());
        let err = prepare_write(&options, None, temp.path()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_prepare_write_filename_gets_extension() {
        let temp = tempfile::tempdir().unwrap();
        let options = EventOptions::single(standup()).with_filename("party");

        let (dest, content) = prepare_write(&options, None, temp.path()).unwrap();

        assert_eq!(dest, temp.path().join("party.ics"));
        assert!(content.contains("SUMMARY:Standup"));
    }

    #[test]
    fn test_prepare_write_directory_requires_filename() {
        let temp = tempfile::tempdir().unwrap();
        let options = EventOptions::single(standup());

        let err = prepare_write(&options, Some(Path::new("/some/dir")), temp.path()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_write_event_file_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let options = EventOptions::single(standup()).with_filename("standup.ics");

        let path = write_event_file(&options, Some(dir.path())).unwrap();

        assert_eq!(path, dir.path().join("standup.ics"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(written.ends_with("\r\nEND:VCALENDAR"));
    }

    #[test]
    fn test_write_event_file_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let options = EventOptions::single(standup()).with_filename("x.ics");

        let err = write_event_file(&options, Some(&missing)).unwrap_err();
        assert!(matches!(err, CalEventError::Io(_)));
    }

    #[test]
    fn test_write_event_file_validation_happens_first() {
        let dir = tempfile::tempdir().unwrap();
        let options = EventOptions::default().with_filename("x.ics");

        let err = write_event_file(&options, Some(dir.path())).unwrap_err();

        assert!(err.is_validation());
        assert!(!dir.path().join("x.ics").exists());
    }

    #[tokio::test]
    async fn test_write_event_file_async() {
        let dir = tempfile::tempdir().unwrap();
        let options = EventOptions::single(standup()).with_filename("async.ics");

        let path = write_event_file_async(&options, Some(dir.path())).await.unwrap();

        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(written.contains("SUMMARY:Standup"));
    }
}
