//! User configuration at ~/.config/calevent/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::error::{CalEventError, CalEventResult};

static DEFAULT_LOG_LEVEL: &str = "warn";

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Defaults applied by the CLI when a flag is not given.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalEventConfig {
    /// Directory to write into when `--dir` is not passed
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Filename to use when neither the options nor `--filename` name one
    #[serde(default)]
    pub filename: Option<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CalEventConfig {
    fn default() -> Self {
        CalEventConfig {
            output_dir: None,
            filename: None,
            log_level: default_log_level(),
        }
    }
}

impl CalEventConfig {
    pub fn config_path() -> CalEventResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalEventError::Config("Could not determine config directory".into()))?
            .join("calevent");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config from its default location. A missing file yields defaults.
    pub fn load() -> CalEventResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> CalEventResult<Self> {
        let config: CalEventConfig = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .build()
            .map_err(|e| CalEventError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalEventError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The output directory with `~` expanded.
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.output_dir.as_ref().map(|dir| {
            PathBuf::from(shellexpand::tilde(&dir.to_string_lossy()).into_owned())
        })
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalEventResult<()> {
        let contents = format!(
            "\
# calevent configuration

# Directory for `calevent write` when --dir is not given
# (a filename must then come from the options, --filename or below):
# output_dir = \"~/calendar\"

# Filename used when none is given:
# filename = \"event.ics\"

# Log level (error, warn, info, debug, trace):
# log_level = \"{}\"
",
            DEFAULT_LOG_LEVEL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalEventError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalEventError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
