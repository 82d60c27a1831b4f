//! Scripted event source for tests.
//!
//! Allows tests to replay a fixed sequence of [`InputEvent`]s and failures
//! without an evdev node.  Once the script runs out the source reports
//! [`EventSourceError::Closed`], exactly as a device would after unplugging.

use std::collections::VecDeque;

use super::{EventSource, EventSourceError};
use crate::event::InputEvent;
use crate::keymap::evdev::KeyCode;

/// An [`EventSource`] that replays a queued script.
#[derive(Debug, Default)]
pub struct ScriptedEventSource {
    script: VecDeque<Result<InputEvent, EventSourceError>>,
    consumed: usize,
}

impl ScriptedEventSource {
    /// Creates an empty source.  The first `next_event` reports `Closed`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source that replays `events` in order.
    pub fn from_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = InputEvent>,
    {
        Self {
            script: events.into_iter().map(Ok).collect(),
            consumed: 0,
        }
    }

    /// Queues one event.
    pub fn push_event(&mut self, event: InputEvent) -> &mut Self {
        self.script.push_back(Ok(event));
        self
    }

    /// Queues one failure.
    pub fn push_error(&mut self, error: EventSourceError) -> &mut Self {
        self.script.push_back(Err(error));
        self
    }

    /// Queues a press and release of `key`, the pair a scanner emits per
    /// character.
    pub fn push_keystroke(&mut self, key: KeyCode) -> &mut Self {
        self.push_event(InputEvent::press(key))
            .push_event(InputEvent::release(key))
    }

    /// Returns the number of script entries handed out so far, including
    /// failures.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Returns the number of script entries not yet handed out.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl EventSource for ScriptedEventSource {
    fn next_event(&mut self) -> Result<InputEvent, EventSourceError> {
        match self.script.pop_front() {
            Some(entry) => {
                self.consumed += 1;
                entry
            }
            None => Err(EventSourceError::Closed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_replays_in_order() {
        // Arrange
        let mut source = ScriptedEventSource::new();
        source
            .push_keystroke(KeyCode::KeyA)
            .push_error(EventSourceError::Interrupted);

        // Act / Assert
        assert_eq!(source.next_event().unwrap(), InputEvent::press(KeyCode::KeyA));
        assert_eq!(source.next_event().unwrap(), InputEvent::release(KeyCode::KeyA));
        assert!(matches!(source.next_event(), Err(EventSourceError::Interrupted)));
        assert_eq!(source.consumed(), 3);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_exhausted_script_reports_closed_without_counting() {
        let mut source = ScriptedEventSource::from_events([InputEvent::sync()]);

        source.next_event().expect("one event queued");

        assert!(matches!(source.next_event(), Err(EventSourceError::Closed)));
        assert!(matches!(source.next_event(), Err(EventSourceError::Closed)));
        assert_eq!(source.consumed(), 1);
    }
}
