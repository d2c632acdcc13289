//! Key forwarding: replaying an intercepted chord into the focused window.

use crate::chord::KeyChord;
use crate::error::InputError;
use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Delay between pressing modifiers and the base key (10ms).
pub const MODIFIER_SETTLE_MS: u64 = 10;

/// Replays a key chord so the application receives the keystroke that was
/// intercepted on the way in.
pub trait KeyForwarder: Send + Sync {
    fn forward(&self, chord: &KeyChord) -> Result<(), InputError>;
}

/// Shared handle to a key forwarder.
pub type KeyForwarderRef = Arc<dyn KeyForwarder>;

/// Forwarder backed by OS-level key simulation.
pub struct SystemForwarder {
    enigo: Mutex<Enigo>,
}

impl SystemForwarder {
    /// Create a new system forwarder.
    ///
    /// # Errors
    ///
    /// Returns an error if the input system fails to initialize, for example
    /// when accessibility permissions are not granted.
    pub fn new() -> Result<Self, InputError> {
        let enigo =
            Enigo::new(&Settings::default()).map_err(|e| InputError::InitFailed(e.to_string()))?;

        Ok(Self {
            enigo: Mutex::new(enigo),
        })
    }
}

impl KeyForwarder for SystemForwarder {
    fn forward(&self, chord: &KeyChord) -> Result<(), InputError> {
        let mut enigo = self.enigo.lock().expect("input mutex poisoned");

        let mut modifiers = Vec::new();
        if chord.control {
            modifiers.push(Key::Control);
        }
        if chord.shift {
            modifiers.push(Key::Shift);
        }
        if chord.alt {
            modifiers.push(Key::Alt);
        }

        for modifier in &modifiers {
            enigo
                .key(*modifier, Direction::Press)
                .map_err(|e| InputError::KeyFailed(e.to_string()))?;
        }

        // Small delay to ensure modifiers are registered
        if !modifiers.is_empty() {
            thread::sleep(Duration::from_millis(MODIFIER_SETTLE_MS));
        }

        enigo
            .key(Key::Unicode(chord.key), Direction::Click)
            .map_err(|e| InputError::KeyFailed(e.to_string()))?;

        for modifier in modifiers.iter().rev() {
            enigo
                .key(*modifier, Direction::Release)
                .map_err(|e| InputError::KeyFailed(e.to_string()))?;
        }

        tracing::trace!(chord = %chord, "forwarded key chord");
        Ok(())
    }
}

impl std::fmt::Debug for SystemForwarder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemForwarder").finish_non_exhaustive()
    }
}

/// In-memory forwarder for tests. Records every chord instead of sending it.
#[derive(Debug, Default)]
pub struct InMemoryForwarder {
    sent: Mutex<Vec<KeyChord>>,
}

impl InMemoryForwarder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All chords forwarded so far, in order.
    pub fn sent(&self) -> Vec<KeyChord> {
        self.sent.lock().expect("forwarder mutex poisoned").clone()
    }

    pub fn clear(&self) {
        self.sent.lock().expect("forwarder mutex poisoned").clear();
    }

    pub fn len(&self) -> usize {
        self.sent.lock().expect("forwarder mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyForwarder for InMemoryForwarder {
    fn forward(&self, chord: &KeyChord) -> Result<(), InputError> {
        self.sent
            .lock()
            .expect("forwarder mutex poisoned")
            .push(*chord);
        Ok(())
    }
}

/// Forwarder that silently drops every chord.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullForwarder;

impl KeyForwarder for NullForwarder {
    fn forward(&self, _chord: &KeyChord) -> Result<(), InputError> {
        Ok(())
    }
}
