/// Summary used when an event has no name.
pub const DEFAULT_SUMMARY: &str = "New Event";

/// Hours added to the start time when an event has no end.
pub const DEFAULT_DURATION_HOURS: i64 = 2;

/// File written to the temp directory when no filename is given.
pub const DEFAULT_FILENAME: &str = "calendar-event.ics";

pub const ICS_EXTENSION: &str = ".ics";

pub const LINE_ENDING: &str = "\r\n";
