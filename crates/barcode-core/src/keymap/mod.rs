//! Key code to character translation for released keys.
//!
//! The decoder only emits characters on key release.  [`char_for`] is the
//! whole table: a total function over [`KeyCode`] whose default arm means
//! "this key ends the line".
//!
//! | Keys                                            | Character                          |
//! |-------------------------------------------------|------------------------------------|
//! | `0`-`9`                                         | the digit, shift ignored           |
//! | `A`-`Z`                                         | lowercase, uppercase while shifted |
//! | `-` `=` `;` `'` `` ` `` `\` `,` `.` `/` space   | the literal symbol, shift ignored  |
//! | keypad `*`                                      | `*`                                |
//! | anything else                                   | `None` (line terminator)           |

pub mod evdev;

pub use evdev::KeyCode;

/// Returns the ASCII byte produced by releasing `key`, or `None` if the key
/// terminates the line.
///
/// `shift` only affects letters.  The shift key itself is handled by the
/// decoder before this lookup and maps to `None` here.
pub fn char_for(key: KeyCode, shift: bool) -> Option<u8> {
    let ch = match key {
        KeyCode::Digit0 => b'0',
        KeyCode::Digit1 => b'1',
        KeyCode::Digit2 => b'2',
        KeyCode::Digit3 => b'3',
        KeyCode::Digit4 => b'4',
        KeyCode::Digit5 => b'5',
        KeyCode::Digit6 => b'6',
        KeyCode::Digit7 => b'7',
        KeyCode::Digit8 => b'8',
        KeyCode::Digit9 => b'9',

        KeyCode::KeyA => letter(b'a', shift),
        KeyCode::KeyB => letter(b'b', shift),
        KeyCode::KeyC => letter(b'c', shift),
        KeyCode::KeyD => letter(b'd', shift),
        KeyCode::KeyE => letter(b'e', shift),
        KeyCode::KeyF => letter(b'f', shift),
        KeyCode::KeyG => letter(b'g', shift),
        KeyCode::KeyH => letter(b'h', shift),
        KeyCode::KeyI => letter(b'i', shift),
        KeyCode::KeyJ => letter(b'j', shift),
        KeyCode::KeyK => letter(b'k', shift),
        KeyCode::KeyL => letter(b'l', shift),
        KeyCode::KeyM => letter(b'm', shift),
        KeyCode::KeyN => letter(b'n', shift),
        KeyCode::KeyO => letter(b'o', shift),
        KeyCode::KeyP => letter(b'p', shift),
        KeyCode::KeyQ => letter(b'q', shift),
        KeyCode::KeyR => letter(b'r', shift),
        KeyCode::KeyS => letter(b's', shift),
        KeyCode::KeyT => letter(b't', shift),
        KeyCode::KeyU => letter(b'u', shift),
        KeyCode::KeyV => letter(b'v', shift),
        KeyCode::KeyW => letter(b'w', shift),
        KeyCode::KeyX => letter(b'x', shift),
        KeyCode::KeyY => letter(b'y', shift),
        KeyCode::KeyZ => letter(b'z', shift),

        KeyCode::Minus => b'-',
        KeyCode::Equal => b'=',
        KeyCode::Semicolon => b';',
        KeyCode::Apostrophe => b'\'',
        KeyCode::Grave => b'`',
        KeyCode::Backslash => b'\\',
        KeyCode::Comma => b',',
        KeyCode::Dot => b'.',
        KeyCode::Slash => b'/',
        KeyCode::Space => b' ',
        KeyCode::KeypadAsterisk => b'*',

        // Enter, modifiers, and every unnamed code end the line.
        _ => return None,
    };
    Some(ch)
}

fn letter(lower: u8, shift: bool) -> u8 {
    if shift {
        lower.to_ascii_uppercase()
    } else {
        lower
    }
}
