//! Speech output for ClipSpeak.
//!
//! [`Speech`] is the seam to the host's text-to-speech facility: the engine
//! hands over a finished message string and nothing more. The in-memory and
//! null implementations keep everything above this seam testable without a
//! screen reader attached.

pub mod message;
mod output;

pub use output::{InMemorySpeech, NullSpeech, Speech, SpeechRef};
