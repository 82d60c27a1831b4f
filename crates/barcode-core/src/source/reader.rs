//! [`EventSource`] over any byte reader yielding `struct input_event` records.

use std::io::Read;

use tracing::trace;

use super::{EventSource, EventSourceError};
use crate::event::codec::{decode_event, RAW_EVENT_SIZE};
use crate::event::InputEvent;

/// Reads one raw record per [`EventSource::next_event`] call.
///
/// An evdev node only ever returns whole records, so each call issues exactly
/// one `read` of [`RAW_EVENT_SIZE`] bytes and judges the result as is:
///
/// | `read` result          | Outcome                            |
/// |------------------------|------------------------------------|
/// | `Ok(RAW_EVENT_SIZE)`   | decoded event                      |
/// | `Ok(0)`                | [`EventSourceError::Closed`]       |
/// | `Ok(n)`, other `n`     | [`EventSourceError::Malformed`]    |
/// | `Err(Interrupted)`     | [`EventSourceError::Interrupted`]  |
/// | `Err(_)`               | [`EventSourceError::Io`]           |
#[derive(Debug)]
pub struct ReaderEventSource<R> {
    reader: R,
    buf: [u8; RAW_EVENT_SIZE],
    records_read: u64,
}

impl<R: Read> ReaderEventSource<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: [0u8; RAW_EVENT_SIZE],
            records_read: 0,
        }
    }

    /// Returns the number of complete records decoded so far.
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Returns a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }
}

impl<R: Read> EventSource for ReaderEventSource<R> {
    fn next_event(&mut self) -> Result<InputEvent, EventSourceError> {
        let n = self.reader.read(&mut self.buf)?;
        if n == 0 {
            return Err(EventSourceError::Closed);
        }
        let event = decode_event(&self.buf[..n])?;
        self.records_read += 1;
        trace!(
            kind = ?event.kind,
            code = event.code,
            value = event.value,
            secs = event.time.secs,
            micros = event.time.micros,
            "input event"
        );
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::*;
    use crate::event::codec::encode_event;
    use crate::event::EventKind;
    use crate::keymap::evdev::KeyCode;

    fn stream(events: &[InputEvent]) -> Vec<u8> {
        events.iter().flat_map(encode_event).collect()
    }

    /// Reader that fails with `Interrupted` a fixed number of times before
    /// delegating.
    struct InterruptingReader<R> {
        interruptions: usize,
        inner: R,
    }

    impl<R: Read> Read for InterruptingReader<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.interruptions > 0 {
                self.interruptions -= 1;
                return Err(io::ErrorKind::Interrupted.into());
            }
            self.inner.read(buf)
        }
    }

    #[test]
    fn test_reads_events_in_order_then_closes() {
        // Arrange
        let bytes = stream(&[
            InputEvent::press(KeyCode::KeyA),
            InputEvent::sync(),
            InputEvent::release(KeyCode::KeyA),
        ]);
        let mut source = ReaderEventSource::new(Cursor::new(bytes));

        // Act / Assert
        assert_eq!(source.next_event().unwrap(), InputEvent::press(KeyCode::KeyA));
        assert_eq!(source.next_event().unwrap().kind, EventKind::Synchronization);
        assert_eq!(source.next_event().unwrap(), InputEvent::release(KeyCode::KeyA));
        assert!(matches!(source.next_event(), Err(EventSourceError::Closed)));
        assert_eq!(source.records_read(), 3);
    }

    #[test]
    fn test_empty_reader_is_closed() {
        let mut source = ReaderEventSource::new(Cursor::new(Vec::new()));
        assert!(matches!(source.next_event(), Err(EventSourceError::Closed)));
    }

    #[test]
    fn test_trailing_partial_record_is_malformed() {
        // Arrange: one full record plus five stray bytes
        let mut bytes = stream(&[InputEvent::release(KeyCode::Digit1)]);
        bytes.extend_from_slice(&[0u8; 5]);
        let mut source = ReaderEventSource::new(Cursor::new(bytes));

        // Act
        source.next_event().expect("first record is whole");
        let second = source.next_event();

        // Assert
        assert!(matches!(
            second,
            Err(EventSourceError::Malformed {
                expected: RAW_EVENT_SIZE,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_interrupted_read_surfaces_as_interrupted() {
        let reader = InterruptingReader {
            interruptions: 1,
            inner: Cursor::new(stream(&[InputEvent::release(KeyCode::Enter)])),
        };
        let mut source = ReaderEventSource::new(reader);

        assert!(matches!(source.next_event(), Err(EventSourceError::Interrupted)));
        assert_eq!(
            source.next_event().unwrap(),
            InputEvent::release(KeyCode::Enter)
        );
    }
}
