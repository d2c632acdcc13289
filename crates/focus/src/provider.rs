//! Provider trait for focus inspection.
//!
//! Abstracts the host's accessibility tree so the classification logic stays
//! pure and testable.

use std::sync::{Arc, Mutex};

use crate::snapshot::FocusSnapshot;

/// Provider for inspecting the currently focused UI element.
pub trait FocusProvider: Send + Sync {
    /// Snapshot of the focused element, or `None` when nothing has focus.
    fn focused_element(&self) -> Option<FocusSnapshot>;
}

/// Type alias for shared focus provider reference.
pub type FocusProviderRef = Arc<dyn FocusProvider>;

/// Null implementation for testing or headless use.
pub struct NullFocusProvider;

impl FocusProvider for NullFocusProvider {
    fn focused_element(&self) -> Option<FocusSnapshot> {
        None
    }
}

/// Settable focus provider for tests.
#[derive(Default)]
pub struct InMemoryFocusProvider {
    focus: Mutex<Option<FocusSnapshot>>,
}

impl InMemoryFocusProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move focus to the given element.
    pub fn focus(&self, snapshot: FocusSnapshot) {
        *self.focus.lock().expect("focus mutex poisoned") = Some(snapshot);
    }

    /// Drop focus entirely.
    pub fn blur(&self) {
        *self.focus.lock().expect("focus mutex poisoned") = None;
    }
}

impl FocusProvider for InMemoryFocusProvider {
    fn focused_element(&self) -> Option<FocusSnapshot> {
        self.focus.lock().expect("focus mutex poisoned").clone()
    }
}
