//! Layered dashboard settings.
//!
//! Defaults, then an optional TOML file, then `AWACS_*` environment
//! variables. Command-line flags are applied on top by the binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use ::config::{Config, Environment, File};
use serde::Deserialize;

use crate::data::duration::parse_duration;
use crate::data::palette::{Palette, DEFAULT_COLORS};

pub const DEFAULT_REFRESH: &str = "1s";
pub const DEFAULT_LOG_FILE: &str = "/tmp/awacs-dashboard.log";

/// Settings shared by the TUI and export modes.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// How often the file source is polled, e.g. "1s".
    pub refresh: String,
    /// Colors assigned to firmware versions in discovery order.
    pub palette: Vec<String>,
    pub log_file: PathBuf,
}

impl Settings {
    /// Load settings, reading `path` if given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("refresh", DEFAULT_REFRESH)?
            .set_default("palette", DEFAULT_COLORS.to_vec())?
            .set_default("log_file", DEFAULT_LOG_FILE)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("AWACS")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("palette"),
        );

        let settings = builder
            .build()
            .context("failed to load settings")?
            .try_deserialize()
            .context("invalid settings")?;
        Ok(settings)
    }

    pub fn refresh_interval(&self) -> Result<Duration> {
        parse_duration(&self.refresh).context("invalid refresh interval")
    }

    pub fn palette(&self) -> Result<Palette> {
        Palette::new(self.palette.iter().cloned())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh: DEFAULT_REFRESH.to_string(),
            palette: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}
