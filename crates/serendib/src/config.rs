//! Configuration management for serendib.
//!
//! Configuration is loaded with figment from TOML config files, environment
//! variables, and defaults, then validated before use.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::devlog::{LogWriterConfig, DEFAULT_MAX_SINK_BYTES, DEFAULT_RETENTION_FRACTION};
use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "serendib";

/// Directory under the data dir holding the dev-log sinks.
const DEVLOG_DIR_NAME: &str = "devlog";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `SERENDIB_`, sections separated
///    by `__`, e.g. `SERENDIB_DEVLOG__MAX_SINK_BYTES`)
/// 2. TOML config file at `~/.config/serendib/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dev-log writer configuration.
    pub devlog: DevlogConfig,
    /// Booking flow configuration.
    pub booking: BookingConfig,
}

/// Dev-log writer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevlogConfig {
    /// Directory holding the per-source sink files.
    /// Defaults to `~/.local/share/serendib/devlog`.
    pub dir: Option<PathBuf>,
    /// Maximum size of one sink file in bytes before it is trimmed.
    pub max_sink_bytes: u64,
    /// Fraction of `max_sink_bytes` retained after a trim.
    pub retention_fraction: f64,
}

/// Booking flow configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Route the confirmation view's control navigates to.
    pub home_route: String,
}

impl Default for DevlogConfig {
    fn default() -> Self {
        Self {
            dir: None, // Will be resolved to default at runtime
            max_sink_bytes: DEFAULT_MAX_SINK_BYTES,
            retention_fraction: DEFAULT_RETENTION_FRACTION,
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            home_route: "/".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `SERENDIB_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("SERENDIB_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.devlog.max_sink_bytes == 0 {
            return Err(Error::config_validation(
                "max_sink_bytes must be greater than 0",
            ));
        }

        if !(self.devlog.retention_fraction > 0.0 && self.devlog.retention_fraction <= 1.0) {
            return Err(Error::config_validation(format!(
                "retention_fraction ({}) must be in (0, 1]",
                self.devlog.retention_fraction
            )));
        }

        if self.booking.home_route.is_empty() {
            return Err(Error::config_validation("home_route must not be empty"));
        }

        Ok(())
    }

    /// Get the dev-log directory, resolving defaults if not set.
    #[must_use]
    pub fn devlog_dir(&self) -> PathBuf {
        self.devlog
            .dir
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DEVLOG_DIR_NAME))
    }

    /// Resolve the construction-time settings for the dev-log writer.
    #[must_use]
    pub fn log_writer_config(&self) -> LogWriterConfig {
        LogWriterConfig {
            dir: self.devlog_dir(),
            max_sink_bytes: self.devlog.max_sink_bytes,
            retention_fraction: self.devlog.retention_fraction,
        }
    }
}
