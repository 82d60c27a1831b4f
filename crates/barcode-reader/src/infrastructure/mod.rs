//! Infrastructure layer for the reader.
//!
//! Contains OS-facing adapters: the evdev device and config-file storage.
//!
//! **Dependency rule**: this layer may depend on `application`, `domain`, and
//! `barcode_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod device;
pub mod storage;
