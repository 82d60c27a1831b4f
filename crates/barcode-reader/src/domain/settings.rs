//! Resolved runtime settings.

use std::path::PathBuf;

use barcode_core::DEFAULT_LINE_CAPACITY;

/// How many lines the reader decodes before exiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Decode one line, print it, exit.
    #[default]
    Single,
    /// Keep decoding lines until the first failure.
    Follow,
}

/// Everything the reader needs once arguments and config are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderSettings {
    /// Path of the evdev node, e.g. `/dev/input/by-id/usb-Scanner-event-kbd`.
    pub device: PathBuf,
    /// Whether to request exclusive access with `EVIOCGRAB`.
    pub grab: bool,
    /// Output buffer capacity including the terminator slot.
    pub capacity: usize,
    pub mode: ScanMode,
}

impl ReaderSettings {
    /// Settings for `device` with every other field at its default.
    pub fn for_device(device: impl Into<PathBuf>) -> Self {
        Self {
            device: device.into(),
            grab: true,
            capacity: DEFAULT_LINE_CAPACITY,
            mode: ScanMode::Single,
        }
    }
}
