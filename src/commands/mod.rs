pub mod config;
pub mod new;
pub mod render;
pub mod write;

use std::path::PathBuf;

use calevent_core::EventOptions;
use calevent_core::config::CalEventConfig;

/// Apply flag and config fallbacks for the output location.
///
/// A `--filename` flag overrides the options' filename, which in turn wins
/// over the config file. `--dir` wins over the configured `output_dir`.
pub fn resolve_output(
    options: &mut EventOptions,
    dir: Option<PathBuf>,
    filename: Option<String>,
    config: &CalEventConfig,
) -> Option<PathBuf> {
    if filename.is_some() {
        options.filename = filename;
    } else if options.filename.is_none() {
        options.filename = config.filename.clone();
    }

    dir.or_else(|| config.output_dir())
}
