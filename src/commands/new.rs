use std::path::PathBuf;

use anyhow::Result;
use calevent_core::config::CalEventConfig;
use calevent_core::{AttendeeInput, DateInput, EventInput, EventOptions, OrganizerInput};
use owo_colors::OwoColorize;

/// Event fields collected from flags.
pub struct NewArgs {
    pub name: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub organizer: Option<String>,
    pub attendees: Vec<String>,
    pub rsvp: bool,
}

/// Where to write the event, when `--write` is given.
pub struct WriteTarget {
    pub dir: Option<PathBuf>,
    pub filename: Option<String>,
}

pub async fn run(args: NewArgs, target: Option<WriteTarget>, config: &CalEventConfig) -> Result<()> {
    let mut options = EventOptions::single(build_event(args));

    match target {
        None => {
            let document = calevent_core::render_document(&options)?;
            print!("{}\r\n", document);
        }
        Some(WriteTarget { dir, filename }) => {
            let dir = super::resolve_output(&mut options, dir, filename, config);
            let path = calevent_core::write_event_file_async(&options, dir.as_deref()).await?;
            println!("{} {}", "Wrote".green(), path.display());
        }
    }

    Ok(())
}

fn build_event(args: NewArgs) -> EventInput {
    let attendees: Vec<AttendeeInput> = args
        .attendees
        .iter()
        .map(|a| {
            let (name, email) = parse_mailbox(a);
            AttendeeInput {
                name,
                email,
                rsvp: Some(args.rsvp),
            }
        })
        .collect();

    EventInput {
        dtstamp: None,
        dtstart: args.start.map(DateInput::from),
        dtend: args.end.map(DateInput::from),
        event_name: args.name,
        description: args.description,
        location: args.location,
        organizer: args.organizer.as_deref().map(|o| {
            let (name, email) = parse_mailbox(o);
            OrganizerInput { name, email }
        }),
        attendees: (!attendees.is_empty()).then_some(attendees),
    }
}

/// Split `"Name <email>"` into its parts. A bare address has no name.
fn parse_mailbox(s: &str) -> (Option<String>, Option<String>) {
    let s = s.trim();

    if let Some((name, rest)) = s.split_once('<') {
        let email = rest.trim_end().trim_end_matches('>').trim();
        let name = name.trim().trim_matches('"').trim();
        return (non_empty(name), non_empty(email));
    }

    (None, non_empty(s))
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
