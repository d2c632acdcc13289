//! Host dispatch seam: script resolution and native selection redirects.
//!
//! The screen reader resolves gestures against whatever the focused element
//! binds; the engine only announces chords the focused control does not
//! already handle. This trait is the boundary to that resolution machinery.

use clipspeak_input::KeyChord;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Host-side gesture resolution and application scripting.
pub trait HostDispatch: Send + Sync {
    /// Whether the host is running on a locked-down (secure) desktop.
    fn is_secure(&self) -> bool {
        false
    }

    /// Whether the focused element (or its active content-handling layer)
    /// already binds a script to this chord.
    fn has_bound_script(&self, chord: &KeyChord) -> bool;

    /// Invoke the script the focused element binds to this chord.
    fn invoke_bound_script(&self, chord: &KeyChord);

    /// Drive the word processor's native selection-copy API.
    ///
    /// Returns `true` if the host performed the copy. On `false` the caller
    /// must forward the raw keystroke so the copy still happens.
    fn selection_copy(&self) -> bool;

    /// Drive the word processor's native selection-paste API. Same return
    /// contract as [`HostDispatch::selection_copy`].
    fn selection_paste(&self) -> bool;
}

/// Shared handle to a host dispatch.
pub type HostDispatchRef = Arc<dyn HostDispatch>;

/// Dispatch for hosts with no script resolution. Every chord falls through
/// to raw forwarding.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHostDispatch;

impl HostDispatch for NullHostDispatch {
    fn has_bound_script(&self, _chord: &KeyChord) -> bool {
        false
    }

    fn invoke_bound_script(&self, _chord: &KeyChord) {
        // Intentionally empty
    }

    fn selection_copy(&self) -> bool {
        false
    }

    fn selection_paste(&self) -> bool {
        false
    }
}

/// In-memory dispatch for tests. Chords registered with [`bind`] resolve as
/// bound scripts; selection redirects always report success and are counted.
///
/// [`bind`]: InMemoryDispatch::bind
#[derive(Debug, Default)]
pub struct InMemoryDispatch {
    secure: bool,
    bound: Mutex<Vec<KeyChord>>,
    invoked: Mutex<Vec<KeyChord>>,
    selection_copies: AtomicUsize,
    selection_pastes: AtomicUsize,
}

impl InMemoryDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch that reports a secure desktop.
    pub fn secure() -> Self {
        Self {
            secure: true,
            ..Self::default()
        }
    }

    /// Register a chord as bound to a script on the focused element.
    pub fn bind(&self, chord: KeyChord) {
        self.bound.lock().expect("dispatch mutex poisoned").push(chord);
    }

    /// Chords whose bound script was invoked, in order.
    pub fn invoked(&self) -> Vec<KeyChord> {
        self.invoked.lock().expect("dispatch mutex poisoned").clone()
    }

    pub fn selection_copies(&self) -> usize {
        self.selection_copies.load(Ordering::SeqCst)
    }

    pub fn selection_pastes(&self) -> usize {
        self.selection_pastes.load(Ordering::SeqCst)
    }
}

impl HostDispatch for InMemoryDispatch {
    fn is_secure(&self) -> bool {
        self.secure
    }

    fn has_bound_script(&self, chord: &KeyChord) -> bool {
        self.bound
            .lock()
            .expect("dispatch mutex poisoned")
            .contains(chord)
    }

    fn invoke_bound_script(&self, chord: &KeyChord) {
        self.invoked
            .lock()
            .expect("dispatch mutex poisoned")
            .push(*chord);
    }

    fn selection_copy(&self) -> bool {
        self.selection_copies.fetch_add(1, Ordering::SeqCst);
        true
    }

    fn selection_paste(&self) -> bool {
        self.selection_pastes.fetch_add(1, Ordering::SeqCst);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_dispatch_never_binds() {
        let dispatch = NullHostDispatch;
        assert!(!dispatch.is_secure());
        assert!(!dispatch.has_bound_script(&KeyChord::control('c')));
        assert!(!dispatch.selection_copy());
    }

    #[test]
    fn test_in_memory_dispatch_resolves_bound_chords() {
        let dispatch = InMemoryDispatch::new();
        let chord = KeyChord::control('c');
        assert!(!dispatch.has_bound_script(&chord));

        dispatch.bind(chord);
        assert!(dispatch.has_bound_script(&chord));

        dispatch.invoke_bound_script(&chord);
        assert_eq!(dispatch.invoked(), vec![chord]);
    }

    #[test]
    fn test_in_memory_dispatch_counts_selection_redirects() {
        let dispatch = InMemoryDispatch::new();
        assert!(dispatch.selection_copy());
        assert!(dispatch.selection_copy());
        assert!(dispatch.selection_paste());
        assert_eq!(dispatch.selection_copies(), 2);
        assert_eq!(dispatch.selection_pastes(), 1);
    }
}
