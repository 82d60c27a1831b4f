//! Event sources feeding the line decoder.
//!
//! The decoder is pull-based: it asks an [`EventSource`] for one event at a
//! time and blocks until it gets one.  Production code reads `struct
//! input_event` records from the device file through [`ReaderEventSource`];
//! tests replay a fixed script through [`mock::ScriptedEventSource`].
//!
//! # Testability
//!
//! The `EventSource` trait lets unit tests inject synthetic events and
//! failures without an evdev node.

use std::io;

use thiserror::Error;

use crate::event::codec::RecordError;
use crate::event::InputEvent;

pub mod mock;
pub mod reader;

pub use reader::ReaderEventSource;

/// Failure reported by an [`EventSource`].
#[derive(Debug, Error)]
pub enum EventSourceError {
    /// A signal interrupted the blocking read.  Retry immediately.
    #[error("read interrupted")]
    Interrupted,

    /// The source will never produce more events.
    #[error("event source closed")]
    Closed,

    /// A record of unexpected size was read.
    #[error("malformed input event: expected {expected} bytes, got {actual}")]
    Malformed { expected: usize, actual: usize },

    /// Any other I/O failure.
    #[error("I/O error reading input event: {0}")]
    Io(#[source] io::Error),
}

impl From<RecordError> for EventSourceError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::WrongSize { expected, actual } => {
                EventSourceError::Malformed { expected, actual }
            }
        }
    }
}

impl From<io::Error> for EventSourceError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::Interrupted => EventSourceError::Interrupted,
            io::ErrorKind::UnexpectedEof => EventSourceError::Closed,
            _ => EventSourceError::Io(err),
        }
    }
}

/// A blocking, sequential supplier of input events.
#[cfg_attr(test, mockall::automock)]
pub trait EventSource {
    /// Blocks until the next event is available.
    ///
    /// # Errors
    ///
    /// Returns [`EventSourceError::Interrupted`] for a transient interruption,
    /// [`EventSourceError::Closed`] once the source is exhausted, and
    /// [`EventSourceError::Malformed`] or [`EventSourceError::Io`] for
    /// terminal failures.
    fn next_event(&mut self) -> Result<InputEvent, EventSourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_interrupted_maps_to_interrupted() {
        let err = EventSourceError::from(io::Error::from(io::ErrorKind::Interrupted));
        assert!(matches!(err, EventSourceError::Interrupted));
    }

    #[test]
    fn test_io_unexpected_eof_maps_to_closed() {
        let err = EventSourceError::from(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(matches!(err, EventSourceError::Closed));
    }

    #[test]
    fn test_other_io_errors_are_kept() {
        let err = EventSourceError::from(io::Error::from(io::ErrorKind::PermissionDenied));
        match err {
            EventSourceError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_record_size_error_maps_to_malformed() {
        let err = EventSourceError::from(RecordError::WrongSize {
            expected: 24,
            actual: 7,
        });
        assert!(matches!(
            err,
            EventSourceError::Malformed {
                expected: 24,
                actual: 7
            }
        ));
    }
}
