//! The line decoder: turns a stream of key events into one line of text.
//!
//! # How a scan arrives (for beginners)
//!
//! A keyboard-wedge scanner "types" each character as a key press followed by
//! a key release, with `EV_SYN`/`EV_MSC` records sprinkled in between.
//! Upper-case letters are bracketed by a shift press and release.  The scan
//! ends with Enter:
//!
//! ```text
//! press(LeftShift) press(A) release(A) release(LeftShift)   -> 'A'
//! press(1) release(1)                                       -> '1'
//! press(Enter) release(Enter)                               -> end of line
//! ```
//!
//! Characters are emitted on *release* only, so a press never produces
//! output.  Shift is tracked from press/autorepeat (held) to release (not
//! held).
//!
//! # Sharp edge: silent truncation
//!
//! The output buffer holds at most `capacity - 1` characters plus the NUL
//! terminator.  Characters beyond that are dropped without an error and the
//! decoder keeps listening for the terminator, so a very long scan comes back
//! cut short.

use std::io;

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::event::{EventKind, InputEvent, KeyAction};
use crate::keymap::char_for;
use crate::source::{EventSource, EventSourceError};

/// Smallest usable buffer: one character plus the terminator.
pub const MIN_CAPACITY: usize = 2;

/// Buffer capacity used by [`LineDecoder::new`]: 1023 characters plus the
/// terminator.
pub const DEFAULT_LINE_CAPACITY: usize = 1024;

/// Failure of a single [`decode_line`] call.
///
/// Any failure discards the characters accumulated so far.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The output buffer cannot hold one character and a terminator.
    #[error("output buffer capacity {capacity} is too small (need at least 2)")]
    InvalidArgument { capacity: usize },

    /// The event source closed before a line was terminated.
    #[error("event source closed before the line was terminated")]
    UnexpectedEndOfStream,

    /// The event source read a record of the wrong size.
    #[error("malformed input event: expected {expected} bytes, got {actual}")]
    MalformedEvent { expected: usize, actual: usize },

    /// An `EV_KEY` record carried a value other than release, press, or
    /// autorepeat.
    #[error("unrecognized EV_KEY value: {0}")]
    UnrecognizedEventValue(i32),

    /// Any other failure while fetching an event.
    #[error("I/O error reading input event: {0}")]
    Io(#[source] io::Error),
}

/// Decodes one line from `source` into `buffer`.
///
/// On success the first `n` bytes of `buffer` hold the line, `buffer[n]` is
/// `0`, and `n >= 1`.  Shift state starts released on every call.
///
/// An Enter (or any unmapped key) released before the first character is
/// ignored, so stray terminators between scans never produce empty lines.
///
/// # Errors
///
/// - [`DecodeError::InvalidArgument`] if `buffer.len() < 2`; no event is
///   consumed.
/// - [`DecodeError::UnexpectedEndOfStream`] if the source closes.
/// - [`DecodeError::MalformedEvent`] or [`DecodeError::Io`] if a fetch fails.
/// - [`DecodeError::UnrecognizedEventValue`] for an unknown key action.
///
/// # Examples
///
/// ```rust
/// use barcode_core::{decode_line, InputEvent, KeyCode};
/// use barcode_core::source::mock::ScriptedEventSource;
///
/// let mut source = ScriptedEventSource::from_events([
///     InputEvent::press(KeyCode::LeftShift),
///     InputEvent::release(KeyCode::KeyA),
///     InputEvent::release(KeyCode::LeftShift),
///     InputEvent::release(KeyCode::Digit7),
///     InputEvent::release(KeyCode::Enter),
/// ]);
/// let mut buf = [0u8; 16];
/// let len = decode_line(&mut source, &mut buf).unwrap();
/// assert_eq!(&buf[..len], b"A7");
/// assert_eq!(buf[len], 0);
/// ```
pub fn decode_line<S>(source: &mut S, buffer: &mut [u8]) -> Result<usize, DecodeError>
where
    S: EventSource + ?Sized,
{
    let capacity = buffer.len();
    if capacity < MIN_CAPACITY {
        return Err(DecodeError::InvalidArgument { capacity });
    }
    let limit = capacity - 1;

    let mut len = 0usize;
    let mut shift = false;
    let mut truncated = false;

    loop {
        let event = fetch(source)?;
        trace!(kind = ?event.kind, code = event.code, value = event.value, shift, len);

        if event.kind != EventKind::Key {
            continue;
        }

        let key = event.key_code();
        match event.action() {
            Ok(KeyAction::Pressed | KeyAction::Autorepeat) => {
                if key.is_shift() {
                    shift = true;
                }
            }
            Ok(KeyAction::Released) => {
                if key.is_shift() {
                    shift = false;
                    continue;
                }
                match char_for(key, shift) {
                    Some(ch) if len < limit => {
                        buffer[len] = ch;
                        len += 1;
                    }
                    Some(_) => {
                        if !truncated {
                            debug!(capacity, "line exceeds buffer; dropping further characters");
                            truncated = true;
                        }
                    }
                    None if len > 0 => {
                        buffer[len] = 0;
                        debug!(len, truncated, terminator = ?key, "line decoded");
                        return Ok(len);
                    }
                    None => {}
                }
            }
            Err(value) => {
                warn!(value, code = event.code, "unrecognized EV_KEY value");
                return Err(DecodeError::UnrecognizedEventValue(value));
            }
        }
    }
}

/// Pulls the next event, retrying transparently on interruption.
fn fetch<S>(source: &mut S) -> Result<InputEvent, DecodeError>
where
    S: EventSource + ?Sized,
{
    loop {
        match source.next_event() {
            Ok(event) => return Ok(event),
            Err(EventSourceError::Interrupted) => {
                trace!("event read interrupted; retrying");
            }
            Err(EventSourceError::Closed) => return Err(DecodeError::UnexpectedEndOfStream),
            Err(EventSourceError::Malformed { expected, actual }) => {
                return Err(DecodeError::MalformedEvent { expected, actual })
            }
            Err(EventSourceError::Io(err)) => return Err(DecodeError::Io(err)),
        }
    }
}

// ── Owned convenience wrapper ─────────────────────────────────────────────────

/// Owns an [`EventSource`] and a reusable buffer, returning decoded lines as
/// `String`s.
///
/// Each [`LineDecoder::next_line`] call is an independent [`decode_line`]:
/// shift state does not carry over and a failure ends only that call.
#[derive(Debug)]
pub struct LineDecoder<S> {
    source: S,
    buffer: Vec<u8>,
    lines_decoded: u64,
}

impl<S: EventSource> LineDecoder<S> {
    /// Creates a decoder with [`DEFAULT_LINE_CAPACITY`].
    pub fn new(source: S) -> Self {
        Self {
            source,
            buffer: vec![0u8; DEFAULT_LINE_CAPACITY],
            lines_decoded: 0,
        }
    }

    /// Creates a decoder whose lines hold at most `capacity - 1` characters.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidArgument`] if `capacity < 2`.
    pub fn with_capacity(source: S, capacity: usize) -> Result<Self, DecodeError> {
        if capacity < MIN_CAPACITY {
            return Err(DecodeError::InvalidArgument { capacity });
        }
        Ok(Self {
            source,
            buffer: vec![0u8; capacity],
            lines_decoded: 0,
        })
    }

    /// Blocks until the next line is decoded.
    ///
    /// # Errors
    ///
    /// Returns the [`DecodeError`] from [`decode_line`].
    pub fn next_line(&mut self) -> Result<String, DecodeError> {
        let len = decode_line(&mut self.source, &mut self.buffer)?;
        self.lines_decoded += 1;
        Ok(self.buffer[..len].iter().copied().map(char::from).collect())
    }

    /// Returns the buffer capacity, including the terminator slot.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the number of lines successfully decoded so far.
    pub fn lines_decoded(&self) -> u64 {
        self.lines_decoded
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
