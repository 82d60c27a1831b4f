//! Domain types for the reader: the resolved runtime settings.
//!
//! Settings are a plain struct with no I/O; the binary fills them in from the
//! command line and the config file, and tests build them directly.

pub mod settings;

pub use settings::{ReaderSettings, ScanMode};
