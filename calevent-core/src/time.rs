//! Date/time normalization for DTSTAMP, DTSTART and DTEND.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Utc};

use crate::constants::DEFAULT_DURATION_HOURS;
use crate::error::{CalEventError, CalEventResult};
use crate::event::{DateInput, EventInput};

/// Naive date-time layouts accepted after RFC 3339 and RFC 2822 fail.
/// These are read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Years that fit the four-digit `YYYY` field of a stamp.
const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

/// The three instants of an event, before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTimes {
    pub dtstamp: DateTime<Utc>,
    pub dtstart: DateTime<Utc>,
    pub dtend: DateTime<Utc>,
}

impl EventTimes {
    /// Resolve an event's times, filling gaps from `now`.
    ///
    /// A missing end is the start (or `now`) plus the default duration.
    pub fn resolve(input: &EventInput, now: DateTime<Utc>) -> CalEventResult<Self> {
        let dtstamp = parse_field("dtstamp", input.dtstamp.as_ref())?.unwrap_or(now);
        let start = parse_field("dtstart", input.dtstart.as_ref())?;
        let dtstart = start.unwrap_or(now);

        let dtend = match parse_field("dtend", input.dtend.as_ref())? {
            Some(end) => end,
            None => dtstart
                .checked_add_signed(Duration::hours(DEFAULT_DURATION_HOURS))
                .filter(in_stamp_range)
                .ok_or_else(|| CalEventError::InvalidDate {
                    field: "dtend",
                    value: format!("{} + {}h", dtstart.to_rfc3339(), DEFAULT_DURATION_HOURS),
                })?,
        };

        Ok(EventTimes {
            dtstamp,
            dtstart,
            dtend,
        })
    }
}

/// Format an instant as `YYYYMMDDTHH0000Z`, dropping minutes and seconds.
pub fn format_stamp(dt: &DateTime<Utc>) -> String {
    let hour = dt
        .with_minute(0)
        .and_then(|d| d.with_second(0))
        .unwrap_or(*dt);
    hour.format("%Y%m%dT%H0000Z").to_string()
}

/// Parse an optional field. Empty strings count as absent.
fn parse_field(
    field: &'static str,
    value: Option<&DateInput>,
) -> CalEventResult<Option<DateTime<Utc>>> {
    match value {
        None => Ok(None),
        Some(DateInput::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => parse_date(value)
            .map(Some)
            .ok_or_else(|| CalEventError::InvalidDate {
                field,
                value: value.to_string(),
            }),
    }
}

/// Parse a date-like value into a UTC instant.
///
/// Fractional epoch values and years outside 0..=9999 are rejected.
pub fn parse_date(value: &DateInput) -> Option<DateTime<Utc>> {
    let dt = match value {
        DateInput::EpochMillis(ms) => DateTime::from_timestamp_millis(*ms),
        DateInput::FractionalMillis(_) => None,
        DateInput::Text(s) => parse_date_str(s.trim()),
    };
    dt.filter(in_stamp_range)
}

fn in_stamp_range(dt: &DateTime<Utc>) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&dt.year())
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M%:z") {
        return Some(dt.with_timezone(&Utc));
    }

    // A trailing Z without seconds (e.g. "2024-01-01T09:37Z") is still UTC
    let naive = s
        .strip_suffix('Z')
        .or_else(|| s.strip_suffix('z'))
        .unwrap_or(s);

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(naive, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
