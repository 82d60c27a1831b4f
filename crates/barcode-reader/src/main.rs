//! barcode-reader: entry point.
//!
//! Opens a keyboard-wedge barcode scanner's evdev node, decodes the
//! keystrokes of one scan into a line of text and prints it to stdout.
//!
//! # Usage
//!
//! ```text
//! barcode-reader [OPTIONS] <DEVICE>
//!
//! Arguments:
//!   <DEVICE>            evdev node, e.g. /dev/input/by-id/usb-Scanner-event-kbd
//!
//! Options:
//!   --config <PATH>     TOML config file
//!   --follow[=<BOOL>]   keep printing lines until the first failure
//!   --no-follow         print one line and exit, whatever the config says
//!   --no-grab[=<BOOL>]  do not request exclusive access
//!   --grab              request exclusive access, whatever the config says
//!   --capacity <N>      line buffer capacity including the terminator (>= 2)
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable           | Flag         |
//! |--------------------|--------------|
//! | `BARCODE_CONFIG`   | `--config`   |
//! | `BARCODE_FOLLOW`   | `--follow`   |
//! | `BARCODE_NO_GRAB`  | `--no-grab`  |
//! | `BARCODE_CAPACITY` | `--capacity` |
//!
//! Flags win over environment variables, which win over the config file.
//! Boolean variables accept `1`/`0`, `yes`/`no`, `on`/`off` and
//! `true`/`false`.  When a flag and its opposite are both given, the last one
//! wins.
//! Logging goes to stderr and is controlled by `RUST_LOG`, falling back to
//! `[logging] level` from the config file.

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::builder::BoolishValueParser;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use barcode_core::decoder::MIN_CAPACITY;
use barcode_core::LineDecoder;
use barcode_reader::application::read_scans::ReadScansUseCase;
use barcode_reader::domain::{ReaderSettings, ScanMode};
use barcode_reader::infrastructure::device::EvdevDevice;
use barcode_reader::infrastructure::storage::{load_config, ReaderConfig};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Reads barcode scans from a Linux keyboard-wedge scanner.
#[derive(Debug, Parser)]
#[command(
    name = "barcode-reader",
    about = "Decodes keyboard-wedge barcode scans from a Linux evdev device",
    version
)]
struct Cli {
    /// Path of the scanner's evdev node.
    device: PathBuf,

    /// TOML configuration file.
    ///
    /// Without this flag `$XDG_CONFIG_HOME/barcode-wedge/config.toml` is
    /// read if it exists.
    #[arg(long, env = "BARCODE_CONFIG")]
    config: Option<PathBuf>,

    /// Keep decoding and printing lines until the first failure.
    #[arg(
        long,
        env = "BARCODE_FOLLOW",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    follow: Option<bool>,

    /// Decode a single line even if the config file enables follow mode.
    #[arg(long, overrides_with = "follow")]
    no_follow: bool,

    /// Do not request exclusive access to the device.
    #[arg(
        long,
        env = "BARCODE_NO_GRAB",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    no_grab: Option<bool>,

    /// Request exclusive access even if the config file disables it.
    #[arg(long, overrides_with = "no_grab")]
    grab: bool,

    /// Line buffer capacity including the terminator slot.
    ///
    /// Scans longer than `capacity - 1` characters are truncated.
    #[arg(long, env = "BARCODE_CAPACITY")]
    capacity: Option<usize>,
}

impl Cli {
    /// Merges the parsed arguments over `config` into [`ReaderSettings`].
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting capacity is below 2.
    fn into_settings(self, config: &ReaderConfig) -> anyhow::Result<ReaderSettings> {
        let capacity = self.capacity.unwrap_or(config.decoder.capacity);
        if capacity < MIN_CAPACITY {
            bail!("--capacity must be at least {MIN_CAPACITY}, got {capacity}");
        }

        // `--no-follow` and `--grab` are only set when given after their
        // opposite, and an env-filled `follow` or `no_grab` must not beat them.
        let follow = !self.no_follow && self.follow.unwrap_or(config.output.follow);
        let grab = self.grab || !self.no_grab.unwrap_or(!config.device.grab);

        Ok(ReaderSettings {
            device: self.device,
            grab,
            capacity,
            mode: if follow {
                ScanMode::Follow
            } else {
                ScanMode::Single
            },
        })
    }
}

/// Builds the log filter from `RUST_LOG`, else from the configured level.
fn log_filter(config: &ReaderConfig) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.logging.level)
            .with_context(|| format!("invalid log level {:?}", config.logging.level)),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    // stdout carries only scans, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&config)?)
        .with_writer(io::stderr)
        .init();

    let settings = cli.into_settings(&config)?;
    info!(
        device = %settings.device.display(),
        grab = settings.grab,
        capacity = settings.capacity,
        mode = ?settings.mode,
        "barcode-reader starting"
    );

    let device = EvdevDevice::open(&settings.device, settings.grab)
        .with_context(|| format!("cannot read scans from {}", settings.device.display()))?;
    info!(
        name = device.name().unwrap_or("Unknown"),
        grabbed = device.is_grabbed(),
        "device ready"
    );
    let decoder = LineDecoder::with_capacity(device, settings.capacity)?;
    debug!(capacity = decoder.capacity(), "line decoder ready");

    let stdout = io::stdout();
    let mut use_case = ReadScansUseCase::new(decoder, stdout.lock(), settings.mode);
    let lines = use_case.run()?;

    info!(lines, "barcode-reader finished");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
