//! barcode-reader library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! ```text
//! main()
//!  └─ load_config()            -- TOML file, defaults when absent
//!  └─ EvdevDevice::open()      -- open + best-effort EVIOCGRAB
//!  └─ ReadScansUseCase::run()  -- decode lines, print to stdout
//! ```

#[cfg(not(target_os = "linux"))]
compile_error!("barcode-reader reads Linux evdev devices and only builds on Linux");

pub mod application;
pub mod domain;
pub mod infrastructure;
