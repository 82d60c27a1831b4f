//! # barcode-core
//!
//! Shared library for Barcode-Wedge containing the line decoder, the evdev key
//! code table, the raw `input_event` record codec, and the event source
//! abstraction.
//!
//! This crate performs no device I/O of its own.  It reads from whatever
//! [`std::io::Read`] or [`EventSource`] it is handed, which keeps every piece
//! of it testable with in-memory data.
//!
//! # Architecture overview (for beginners)
//!
//! A USB barcode scanner usually presents itself to the operating system as a
//! keyboard (a "keyboard wedge").  When it reads a code it "types" the
//! characters and finishes with Enter.  On Linux each keystroke arrives as a
//! pair of `struct input_event` records (key down, key up) on an evdev node
//! such as `/dev/input/event3`.
//!
//! This crate turns that stream back into text:
//!
//! - **`event`** – The typed form of one evdev record ([`InputEvent`]) and the
//!   codec that parses the fixed-size native record.
//!
//! - **`keymap`** – The closed [`KeyCode`] enumeration of evdev key codes and
//!   the total function mapping a released key (plus shift state) to an
//!   ASCII byte.
//!
//! - **`source`** – The [`EventSource`] trait the decoder pulls from, a
//!   reader-backed implementation, and a scripted one for tests.
//!
//! - **`decoder`** – The pull-based state machine ([`decode_line`]) that
//!   produces one line per call.

pub mod decoder;
pub mod event;
pub mod keymap;
pub mod source;

pub use decoder::{decode_line, DecodeError, LineDecoder, DEFAULT_LINE_CAPACITY};
pub use event::{EventKind, InputEvent, KeyAction};
pub use keymap::evdev::KeyCode;
pub use source::{EventSource, EventSourceError, ReaderEventSource};
