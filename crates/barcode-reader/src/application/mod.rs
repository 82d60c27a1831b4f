//! Application layer use cases for the reader.
//!
//! Use cases here depend only on the `EventSource` trait and `std::io::Write`,
//! never on the device or the terminal directly, so they run unchanged
//! against scripted events and in-memory output in tests.
//!
//! - **`read_scans`** – Decodes lines from an event source and writes each
//!   one, newline-terminated and flushed, to an output sink.

pub mod read_scans;
