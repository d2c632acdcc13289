//! Error types for keyboard plumbing.

use thiserror::Error;

/// Errors that can occur while handling key chords.
#[derive(Debug, Error)]
pub enum InputError {
    /// Failed to initialize the key simulation backend.
    #[error("failed to initialize key forwarding: {0}")]
    InitFailed(String),

    /// Failed to press or release a key.
    #[error("failed to simulate key: {0}")]
    KeyFailed(String),

    /// A chord identifier could not be parsed.
    #[error("unrecognized key chord: {0}")]
    UnrecognizedChord(String),
}
