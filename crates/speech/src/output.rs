//! Speech output abstraction.
//!
//! Provides a trait-based abstraction over the host's announcement facility,
//! allowing the engine to be tested without a screen reader attached.

use std::sync::{Arc, Mutex};

/// Trait for emitting spoken announcements.
///
/// Implementations connect to the host's text-to-speech facility. Speaking
/// is fire-and-forget; the engine never waits for speech to finish.
pub trait Speech: Send + Sync {
    /// Speak a finished message.
    fn speak(&self, message: &str);
}

/// Type alias for shared speech output reference.
pub type SpeechRef = Arc<dyn Speech>;

/// In-memory speech output for testing.
///
/// Captures all spoken messages for later inspection.
#[derive(Default)]
pub struct InMemorySpeech {
    utterances: Mutex<Vec<String>>,
}

impl InMemorySpeech {
    /// Create a new in-memory speech output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured utterances.
    pub fn utterances(&self) -> Vec<String> {
        self.utterances.lock().expect("speech mutex poisoned").clone()
    }

    /// Get the most recent utterance.
    pub fn last(&self) -> Option<String> {
        self.utterances.lock().expect("speech mutex poisoned").last().cloned()
    }

    /// Clear all captured utterances.
    pub fn clear(&self) {
        self.utterances.lock().expect("speech mutex poisoned").clear();
    }

    /// Get the number of captured utterances.
    pub fn len(&self) -> usize {
        self.utterances.lock().expect("speech mutex poisoned").len()
    }

    /// Check if nothing has been spoken.
    pub fn is_empty(&self) -> bool {
        self.utterances.lock().expect("speech mutex poisoned").is_empty()
    }
}

impl Speech for InMemorySpeech {
    fn speak(&self, message: &str) {
        self.utterances.lock().expect("speech mutex poisoned").push(message.to_string());
    }
}

/// No-op speech output that discards all messages.
pub struct NullSpeech;

impl Speech for NullSpeech {
    fn speak(&self, _message: &str) {
        // Intentionally empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_speech_captures_in_order() {
        let speech = InMemorySpeech::new();

        speech.speak("Copy");
        speech.speak("Pasted text");

        assert_eq!(speech.len(), 2);
        assert_eq!(speech.utterances(), vec!["Copy", "Pasted text"]);
        assert_eq!(speech.last(), Some("Pasted text".to_string()));
    }

    #[test]
    fn test_in_memory_speech_clear() {
        let speech = InMemorySpeech::new();

        speech.speak("Undo");
        assert!(!speech.is_empty());

        speech.clear();
        assert!(speech.is_empty());
        assert_eq!(speech.last(), None);
    }

    #[test]
    fn test_null_speech() {
        let speech = NullSpeech;
        // Should not panic
        speech.speak("discarded");
    }
}
