//! File-system storage: the optional TOML config file.

pub mod config;

pub use config::{load_config, ConfigError, ReaderConfig};
