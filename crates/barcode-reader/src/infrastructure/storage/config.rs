//! TOML-based configuration for the reader.
//!
//! Reads `ReaderConfig` from an explicit path, or from the default location:
//! - `$XDG_CONFIG_HOME/barcode-wedge/config.toml`, else
//! - `~/.config/barcode-wedge/config.toml`
//!
//! ```toml
//! [device]
//! grab = true
//!
//! [decoder]
//! capacity = 1024
//!
//! [output]
//! follow = false
//!
//! [logging]
//! level = "warn"
//! ```
//!
//! # Serde default values
//!
//! Every field carries `#[serde(default = "...")]`, so a partial file (or no
//! file at all) still yields a complete config.  Command-line flags are
//! layered on top by the binary.

use std::path::{Path, PathBuf};

use barcode_core::decoder::MIN_CAPACITY;
use barcode_core::DEFAULT_LINE_CAPACITY;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level reader configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReaderConfig {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub decoder: DecoderConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Device access settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Request exclusive access so the desktop does not also see the scans.
    #[serde(default = "default_true")]
    pub grab: bool,
}

/// Line decoder settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Buffer capacity including the terminator; longer scans are truncated.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Keep printing lines instead of exiting after the first.
    #[serde(default)]
    pub follow: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_capacity() -> usize {
    DEFAULT_LINE_CAPACITY
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            grab: default_true(),
        }
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ReaderConfig {
    /// Checks values serde cannot check.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `decoder.capacity` is below 2 or
    /// `logging.level` is not a valid `tracing` filter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decoder.capacity < MIN_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "decoder.capacity must be at least {MIN_CAPACITY}, got {}",
                self.decoder.capacity
            )));
        }
        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::Invalid(format!(
                "logging.level {:?} is not a valid filter: {e}",
                self.logging.level
            )));
        }
        Ok(())
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Parses and validates a config from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed TOML and
/// [`ConfigError::Invalid`] for out-of-range values.
pub fn parse_config(content: &str) -> Result<ReaderConfig, ConfigError> {
    let cfg: ReaderConfig = toml::from_str(content)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolves the default config file path.
///
/// Returns `None` when neither `XDG_CONFIG_HOME` nor `HOME` is set.
pub fn default_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
    Some(base.join("barcode-wedge").join("config.toml"))
}

/// Loads the reader config.
///
/// With `Some(path)` the file must exist.  With `None` the default location
/// is tried and a missing file yields [`ReaderConfig::default()`].
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors, [`ConfigError::Parse`]
/// if the TOML is malformed, and [`ConfigError::Invalid`] for bad values.
pub fn load_config(path: Option<&Path>) -> Result<ReaderConfig, ConfigError> {
    match path {
        Some(path) => read_config_file(path),
        None => match default_config_path() {
            Some(path) => match read_config_file(&path) {
                Err(ConfigError::Io { source, .. })
                    if source.kind() == std::io::ErrorKind::NotFound =>
                {
                    Ok(ReaderConfig::default())
                }
                other => other,
            },
            None => Ok(ReaderConfig::default()),
        },
    }
}

fn read_config_file(path: &Path) -> Result<ReaderConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
