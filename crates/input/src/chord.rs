//! Keyboard chord identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// A modifier-plus-key combination as bound to an operation.
///
/// Identifiers render lowercase with `+` separators ("control+shift+c"),
/// matching the gesture identifiers hosts show in their input dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
    /// Base key, lowercase.
    pub key: char,
}

impl KeyChord {
    pub const fn new(key: char) -> Self {
        Self {
            control: false,
            shift: false,
            alt: false,
            key,
        }
    }

    pub const fn control(key: char) -> Self {
        Self {
            control: true,
            shift: false,
            alt: false,
            key,
        }
    }

    pub const fn control_shift(key: char) -> Self {
        Self {
            control: true,
            shift: true,
            alt: false,
            key,
        }
    }

    /// Identifier form, e.g. "control+x".
    pub fn identifier(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.control {
            write!(f, "control+")?;
        }
        if self.shift {
            write!(f, "shift+")?;
        }
        if self.alt {
            write!(f, "alt+")?;
        }
        write!(f, "{}", self.key)
    }
}

impl FromStr for KeyChord {
    type Err = InputError;

    /// Parse an identifier like "control+shift+c", as used when the host
    /// remaps a gesture.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut control = false;
        let mut shift = false;
        let mut alt = false;
        let mut key = None;

        for part in s.split('+') {
            match part.trim().to_lowercase().as_str() {
                "control" | "ctrl" => control = true,
                "shift" => shift = true,
                "alt" => alt = true,
                other => {
                    let mut chars = other.chars();
                    match (chars.next(), chars.next(), key) {
                        (Some(c), None, None) => key = Some(c),
                        _ => return Err(InputError::UnrecognizedChord(s.to_string())),
                    }
                }
            }
        }

        match key {
            Some(key) => Ok(Self {
                control,
                shift,
                alt,
                key,
            }),
            None => Err(InputError::UnrecognizedChord(s.to_string())),
        }
    }
}
