//! Typed evdev input events.
//!
//! One [`InputEvent`] corresponds to one `struct input_event` record read from
//! the device.  The raw byte layout lives in [`codec`].

pub mod codec;

use crate::keymap::evdev::KeyCode;

pub use codec::{decode_event, encode_event, RAW_EVENT_SIZE};

// ── Event type codes ──────────────────────────────────────────────────────────

/// Category of an input event (`EV_*` constant in the `type` field).
///
/// Only [`EventKind::Key`] matters to the decoder; a keyboard interleaves
/// `EV_SYN` and `EV_MSC` records between key records and those are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `EV_SYN` (0x00): marks the end of a batch of records.
    Synchronization,
    /// `EV_KEY` (0x01): key or button state change.
    Key,
    /// `EV_REL` (0x02): relative axis motion.
    Relative,
    /// `EV_ABS` (0x03): absolute axis position.
    Absolute,
    /// `EV_MSC` (0x04): miscellaneous, usually the raw scan code.
    Misc,
    /// `EV_LED` (0x11): keyboard LED state.
    Led,
    /// `EV_REP` (0x14): autorepeat configuration.
    Repeat,
    /// Any other type code.
    Other(u16),
}

impl EventKind {
    pub const EV_SYN: u16 = 0x00;
    pub const EV_KEY: u16 = 0x01;
    pub const EV_REL: u16 = 0x02;
    pub const EV_ABS: u16 = 0x03;
    pub const EV_MSC: u16 = 0x04;
    pub const EV_LED: u16 = 0x11;
    pub const EV_REP: u16 = 0x14;

    /// Converts the raw `type` field to an [`EventKind`].
    pub fn from_u16(value: u16) -> Self {
        match value {
            Self::EV_SYN => EventKind::Synchronization,
            Self::EV_KEY => EventKind::Key,
            Self::EV_REL => EventKind::Relative,
            Self::EV_ABS => EventKind::Absolute,
            Self::EV_MSC => EventKind::Misc,
            Self::EV_LED => EventKind::Led,
            Self::EV_REP => EventKind::Repeat,
            other => EventKind::Other(other),
        }
    }

    /// Returns the raw `type` field value.
    pub fn as_u16(self) -> u16 {
        match self {
            EventKind::Synchronization => Self::EV_SYN,
            EventKind::Key => Self::EV_KEY,
            EventKind::Relative => Self::EV_REL,
            EventKind::Absolute => Self::EV_ABS,
            EventKind::Misc => Self::EV_MSC,
            EventKind::Led => Self::EV_LED,
            EventKind::Repeat => Self::EV_REP,
            EventKind::Other(raw) => raw,
        }
    }
}

// ── Key actions ───────────────────────────────────────────────────────────────

/// State transition carried in the `value` field of an `EV_KEY` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum KeyAction {
    Released = 0,
    Pressed = 1,
    Autorepeat = 2,
}

impl TryFrom<i32> for KeyAction {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(KeyAction::Released),
            1 => Ok(KeyAction::Pressed),
            2 => Ok(KeyAction::Autorepeat),
            other => Err(other),
        }
    }
}

// ── Input event ───────────────────────────────────────────────────────────────

/// Kernel timestamp of an event (`struct timeval`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventTime {
    pub secs: i64,
    pub micros: i64,
}

/// One evdev input record.
///
/// `code` and `value` are kept raw: their meaning depends on `kind`, and an
/// unknown key code or action value is something the decoder decides about,
/// not the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub time: EventTime,
    pub kind: EventKind,
    pub code: u16,
    pub value: i32,
}

impl InputEvent {
    /// Builds an event with a zero timestamp.
    pub fn new(kind: EventKind, code: u16, value: i32) -> Self {
        Self {
            time: EventTime::default(),
            kind,
            code,
            value,
        }
    }

    /// Builds an `EV_KEY` event for `key` with the given action.
    pub fn key(key: KeyCode, action: KeyAction) -> Self {
        Self::new(EventKind::Key, key.as_u16(), action as i32)
    }

    /// Builds a key press event.
    pub fn press(key: KeyCode) -> Self {
        Self::key(key, KeyAction::Pressed)
    }

    /// Builds a key release event.
    pub fn release(key: KeyCode) -> Self {
        Self::key(key, KeyAction::Released)
    }

    /// Builds an `EV_SYN` / `SYN_REPORT` event.
    pub fn sync() -> Self {
        Self::new(EventKind::Synchronization, 0, 0)
    }

    /// Returns the key identifier, interpreting `code` as an evdev key code.
    pub fn key_code(&self) -> KeyCode {
        KeyCode::from_u16(self.code)
    }

    /// Returns the key action, or the raw value if it is not one of the three
    /// known actions.
    pub fn action(&self) -> Result<KeyAction, i32> {
        KeyAction::try_from(self.value)
    }
}
