//! Reading options JSON from a file or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use calevent_core::EventOptions;

/// Load options from `path`, or stdin when the path is missing or "-".
pub fn read_options(path: Option<&Path>) -> Result<EventOptions> {
    let json = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read options from stdin")?;
            buf
        }
    };

    parse_options(&json)
}

pub fn parse_options(json: &str) -> Result<EventOptions> {
    EventOptions::from_json(json).context("Invalid options JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_options_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(&path, r#"{"events": {"eventName": "Party"}, "filename": "party"}"#)
            .unwrap();

        let options = read_options(Some(&path)).unwrap();

        assert_eq!(options.filename.as_deref(), Some("party"));
        assert_eq!(options.event_list().unwrap().len(), 1);
    }

    #[test]
    fn test_read_options_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_options(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"), "{}", err);
    }

    #[test]
    fn test_parse_options_rejects_garbage() {
        let err = parse_options("not json").unwrap_err();
        assert_eq!(err.to_string(), "Invalid options JSON");
    }
}
