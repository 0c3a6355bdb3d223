use std::path::{Path, PathBuf};

use anyhow::Result;
use calevent_core::config::CalEventConfig;
use owo_colors::OwoColorize;

use crate::input::read_options;

pub async fn run(
    input: Option<&Path>,
    dir: Option<PathBuf>,
    filename: Option<String>,
    config: &CalEventConfig,
) -> Result<()> {
    let mut options = read_options(input)?;
    let dir = super::resolve_output(&mut options, dir, filename, config);
    tracing::debug!(dir = ?dir, filename = ?options.filename, "Writing event file");

    let path = calevent_core::write_event_file_async(&options, dir.as_deref()).await?;
    println!("{} {}", "Wrote".green(), path.display());

    Ok(())
}
