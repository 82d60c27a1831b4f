//! Codec for the native `struct input_event` record.
//!
//! Record layout (native byte order, no padding on supported targets):
//! ```text
//! [tv_sec: time_t][tv_usec: suseconds_t][type: u16][code: u16][value: i32]
//! ```
//! On 64-bit Linux this is 16 + 2 + 2 + 4 = 24 bytes; on 32-bit targets the
//! timestamp halves to 8 bytes.  The timestamp size is taken from the
//! platform's `libc::timeval` so the codec always matches what the kernel
//! writes.

use std::mem::size_of;

use nix::libc;
use thiserror::Error;

use super::{EventKind, EventTime, InputEvent};

/// Size of the `struct timeval` prefix.
const TIMEVAL_SIZE: usize = size_of::<libc::timeval>();

/// Size of one of the two `timeval` fields.
const TIME_FIELD_SIZE: usize = TIMEVAL_SIZE / 2;

/// Size in bytes of one raw `struct input_event` record.
pub const RAW_EVENT_SIZE: usize = TIMEVAL_SIZE + 2 + 2 + 4;

/// Errors that can occur while decoding a raw record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The slice is not exactly one record long.
    #[error("input event record has wrong size: expected {expected} bytes, got {actual}")]
    WrongSize { expected: usize, actual: usize },
}

/// Decodes one [`InputEvent`] from a record of exactly [`RAW_EVENT_SIZE`] bytes.
///
/// # Errors
///
/// Returns [`RecordError::WrongSize`] if `bytes` is shorter or longer than one
/// record.
pub fn decode_event(bytes: &[u8]) -> Result<InputEvent, RecordError> {
    if bytes.len() != RAW_EVENT_SIZE {
        return Err(RecordError::WrongSize {
            expected: RAW_EVENT_SIZE,
            actual: bytes.len(),
        });
    }

    let secs = read_time_field(&bytes[..TIME_FIELD_SIZE]);
    let micros = read_time_field(&bytes[TIME_FIELD_SIZE..TIMEVAL_SIZE]);

    let off = TIMEVAL_SIZE;
    let kind = u16::from_ne_bytes([bytes[off], bytes[off + 1]]);
    let code = u16::from_ne_bytes([bytes[off + 2], bytes[off + 3]]);
    let value = i32::from_ne_bytes([
        bytes[off + 4],
        bytes[off + 5],
        bytes[off + 6],
        bytes[off + 7],
    ]);

    Ok(InputEvent {
        time: EventTime { secs, micros },
        kind: EventKind::from_u16(kind),
        code,
        value,
    })
}

/// Encodes an [`InputEvent`] into its native record form.
///
/// Used to synthesise device streams in tests and benchmarks.
pub fn encode_event(event: &InputEvent) -> [u8; RAW_EVENT_SIZE] {
    let mut buf = [0u8; RAW_EVENT_SIZE];
    write_time_field(&mut buf[..TIME_FIELD_SIZE], event.time.secs);
    write_time_field(&mut buf[TIME_FIELD_SIZE..TIMEVAL_SIZE], event.time.micros);

    let off = TIMEVAL_SIZE;
    buf[off..off + 2].copy_from_slice(&event.kind.as_u16().to_ne_bytes());
    buf[off + 2..off + 4].copy_from_slice(&event.code.to_ne_bytes());
    buf[off + 4..off + 8].copy_from_slice(&event.value.to_ne_bytes());
    buf
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_time_field(bytes: &[u8]) -> i64 {
    match bytes.len() {
        8 => bytes.try_into().map(i64::from_ne_bytes).unwrap_or_default(),
        4 => bytes
            .try_into()
            .map(|b| i64::from(i32::from_ne_bytes(b)))
            .unwrap_or_default(),
        _ => 0,
    }
}

fn write_time_field(buf: &mut [u8], value: i64) {
    match buf.len() {
        8 => buf.copy_from_slice(&value.to_ne_bytes()),
        // Truncation matches what a 32-bit time_t can hold.
        4 => buf.copy_from_slice(&(value as i32).to_ne_bytes()),
        _ => {}
    }
}
