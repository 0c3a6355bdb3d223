//! ICS document generation.
//!
//! Produces RFC 5545 flavored text: one VCALENDAR wrapping a VEVENT per record,
//! CRLF line endings.

mod generate;

pub use generate::generate_ics;
