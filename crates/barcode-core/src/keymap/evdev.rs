//! Linux evdev key codes (`KEY_*` constants from `linux/input-event-codes.h`).
//!
//! These are the identifiers carried in the `code` field of an `EV_KEY`
//! record.  Only the main keyboard block and the numeric keypad are named
//! here; that covers everything a keyboard-wedge scanner sends.
//!
//! Reference: https://github.com/torvalds/linux/blob/master/include/uapi/linux/input-event-codes.h
//!
//! # What is an evdev key code? (for beginners)
//!
//! The kernel input layer assigns a number to every physical key position,
//! independent of the keyboard layout.  For example:
//!
//! | Key          | evdev code |
//! |--------------|-----------|
//! | `1`          | 2         |
//! | `Q`          | 16        |
//! | Enter        | 28        |
//! | Left Shift   | 42        |
//!
//! Codes follow the historical PC/AT scan-code order, which is why letters are
//! not contiguous (`Q`=16, `A`=30, `Z`=44).
//!
//! # The `Unknown` sentinel
//!
//! Code 0 is `KEY_RESERVED` and is never sent by real hardware.
//! [`KeyCode::Unknown`] shares that value and stands in for every code that
//! has no variant of its own.  The decoder treats all of them as line
//! terminators, so it never needs to name them.

/// Linux evdev key code (`EV_KEY` identifier).
///
/// The numeric value of each variant is its `KEY_*` constant.
/// [`KeyCode::Unknown`] represents any code without a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum KeyCode {
    Escape = 1,

    // Digit row (KEY_1=2 .. KEY_0=11)
    Digit1 = 2,
    Digit2 = 3,
    Digit3 = 4,
    Digit4 = 5,
    Digit5 = 6,
    Digit6 = 7,
    Digit7 = 8,
    Digit8 = 9,
    Digit9 = 10,
    Digit0 = 11,
    Minus = 12,
    Equal = 13,
    Backspace = 14,
    Tab = 15,

    // Top letter row
    KeyQ = 16,
    KeyW = 17,
    KeyE = 18,
    KeyR = 19,
    KeyT = 20,
    KeyY = 21,
    KeyU = 22,
    KeyI = 23,
    KeyO = 24,
    KeyP = 25,
    BracketLeft = 26,
    BracketRight = 27,
    Enter = 28,
    LeftCtrl = 29,

    // Home row
    KeyA = 30,
    KeyS = 31,
    KeyD = 32,
    KeyF = 33,
    KeyG = 34,
    KeyH = 35,
    KeyJ = 36,
    KeyK = 37,
    KeyL = 38,
    Semicolon = 39,
    Apostrophe = 40,
    Grave = 41,
    LeftShift = 42,
    Backslash = 43,

    // Bottom row
    KeyZ = 44,
    KeyX = 45,
    KeyC = 46,
    KeyV = 47,
    KeyB = 48,
    KeyN = 49,
    KeyM = 50,
    Comma = 51,
    Dot = 52,
    Slash = 53,
    RightShift = 54,
    KeypadAsterisk = 55,
    LeftAlt = 56,
    Space = 57,
    CapsLock = 58,

    // Function keys F1-F10 (59-68)
    F1 = 59,
    F2 = 60,
    F3 = 61,
    F4 = 62,
    F5 = 63,
    F6 = 64,
    F7 = 65,
    F8 = 66,
    F9 = 67,
    F10 = 68,
    NumLock = 69,
    ScrollLock = 70,

    // Numeric keypad
    Keypad7 = 71,
    Keypad8 = 72,
    Keypad9 = 73,
    KeypadMinus = 74,
    Keypad4 = 75,
    Keypad5 = 76,
    Keypad6 = 77,
    KeypadPlus = 78,
    Keypad1 = 79,
    Keypad2 = 80,
    Keypad3 = 81,
    Keypad0 = 82,
    KeypadDot = 83,

    F11 = 87,
    F12 = 88,

    KeypadEnter = 96,
    RightCtrl = 97,
    KeypadSlash = 98,
    RightAlt = 100,

    /// `KEY_RESERVED`, and the sentinel for codes without a variant.
    Unknown = 0,
}

impl KeyCode {
    /// Converts a raw evdev code to a [`KeyCode`].
    ///
    /// Returns [`KeyCode::Unknown`] if the value does not correspond to a
    /// named variant.
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => KeyCode::Escape,
            2 => KeyCode::Digit1,
            3 => KeyCode::Digit2,
            4 => KeyCode::Digit3,
            5 => KeyCode::Digit4,
            6 => KeyCode::Digit5,
            7 => KeyCode::Digit6,
            8 => KeyCode::Digit7,
            9 => KeyCode::Digit8,
            10 => KeyCode::Digit9,
            11 => KeyCode::Digit0,
            12 => KeyCode::Minus,
            13 => KeyCode::Equal,
            14 => KeyCode::Backspace,
            15 => KeyCode::Tab,
            16 => KeyCode::KeyQ,
            17 => KeyCode::KeyW,
            18 => KeyCode::KeyE,
            19 => KeyCode::KeyR,
            20 => KeyCode::KeyT,
            21 => KeyCode::KeyY,
            22 => KeyCode::KeyU,
            23 => KeyCode::KeyI,
            24 => KeyCode::KeyO,
            25 => KeyCode::KeyP,
            26 => KeyCode::BracketLeft,
            27 => KeyCode::BracketRight,
            28 => KeyCode::Enter,
            29 => KeyCode::LeftCtrl,
            30 => KeyCode::KeyA,
            31 => KeyCode::KeyS,
            32 => KeyCode::KeyD,
            33 => KeyCode::KeyF,
            34 => KeyCode::KeyG,
            35 => KeyCode::KeyH,
            36 => KeyCode::KeyJ,
            37 => KeyCode::KeyK,
            38 => KeyCode::KeyL,
            39 => KeyCode::Semicolon,
            40 => KeyCode::Apostrophe,
            41 => KeyCode::Grave,
            42 => KeyCode::LeftShift,
            43 => KeyCode::Backslash,
            44 => KeyCode::KeyZ,
            45 => KeyCode::KeyX,
            46 => KeyCode::KeyC,
            47 => KeyCode::KeyV,
            48 => KeyCode::KeyB,
            49 => KeyCode::KeyN,
            50 => KeyCode::KeyM,
            51 => KeyCode::Comma,
            52 => KeyCode::Dot,
            53 => KeyCode::Slash,
            54 => KeyCode::RightShift,
            55 => KeyCode::KeypadAsterisk,
            56 => KeyCode::LeftAlt,
            57 => KeyCode::Space,
            58 => KeyCode::CapsLock,
            59 => KeyCode::F1,
            60 => KeyCode::F2,
            61 => KeyCode::F3,
            62 => KeyCode::F4,
            63 => KeyCode::F5,
            64 => KeyCode::F6,
            65 => KeyCode::F7,
            66 => KeyCode::F8,
            67 => KeyCode::F9,
            68 => KeyCode::F10,
            69 => KeyCode::NumLock,
            70 => KeyCode::ScrollLock,
            71 => KeyCode::Keypad7,
            72 => KeyCode::Keypad8,
            73 => KeyCode::Keypad9,
            74 => KeyCode::KeypadMinus,
            75 => KeyCode::Keypad4,
            76 => KeyCode::Keypad5,
            77 => KeyCode::Keypad6,
            78 => KeyCode::KeypadPlus,
            79 => KeyCode::Keypad1,
            80 => KeyCode::Keypad2,
            81 => KeyCode::Keypad3,
            82 => KeyCode::Keypad0,
            83 => KeyCode::KeypadDot,
            87 => KeyCode::F11,
            88 => KeyCode::F12,
            96 => KeyCode::KeypadEnter,
            97 => KeyCode::RightCtrl,
            98 => KeyCode::KeypadSlash,
            100 => KeyCode::RightAlt,
            _ => KeyCode::Unknown,
        }
    }

    /// Returns the raw evdev code for this key.
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Returns `true` for the shift key the decoder tracks as its modifier.
    ///
    /// Only the left shift key is tracked.  A right shift release falls into
    /// the unmapped branch like any other key without a character.
    pub fn is_shift(self) -> bool {
        self == KeyCode::LeftShift
    }
}
