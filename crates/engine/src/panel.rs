//! Settings panel registration with the host UI.

use std::sync::{Arc, Mutex};

/// Describes the panel the host should render inside its settings dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsPanel {
    pub title: &'static str,
    pub checkbox_label: &'static str,
}

impl SettingsPanel {
    pub const fn clipspeak() -> Self {
        Self {
            title: "ClipSpeak",
            checkbox_label: "Announce only copy/cut/paste",
        }
    }
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::clipspeak()
    }
}

/// Host surface for adding and removing settings panels.
pub trait SettingsUi: Send + Sync {
    fn register(&self, panel: &SettingsPanel);
    fn unregister(&self, panel: &SettingsPanel);
}

/// Shared handle to a settings UI.
pub type SettingsUiRef = Arc<dyn SettingsUi>;

/// Settings UI that ignores every panel.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSettingsUi;

impl SettingsUi for NullSettingsUi {
    fn register(&self, _panel: &SettingsPanel) {
        // Intentionally empty
    }

    fn unregister(&self, _panel: &SettingsPanel) {
        // Intentionally empty
    }
}

/// In-memory settings UI for tests. Tracks which panels are registered.
#[derive(Debug, Default)]
pub struct InMemorySettingsUi {
    registered: Mutex<Vec<&'static str>>,
}

impl InMemorySettingsUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self, title: &str) -> bool {
        self.registered
            .lock()
            .expect("panel mutex poisoned")
            .iter()
            .any(|&t| t == title)
    }

    pub fn registered_count(&self) -> usize {
        self.registered.lock().expect("panel mutex poisoned").len()
    }
}

impl SettingsUi for InMemorySettingsUi {
    fn register(&self, panel: &SettingsPanel) {
        self.registered
            .lock()
            .expect("panel mutex poisoned")
            .push(panel.title);
    }

    fn unregister(&self, panel: &SettingsPanel) {
        self.registered
            .lock()
            .expect("panel mutex poisoned")
            .retain(|&t| t != panel.title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_labels() {
        let panel = SettingsPanel::default();
        assert_eq!(panel.title, "ClipSpeak");
        assert_eq!(panel.checkbox_label, "Announce only copy/cut/paste");
    }

    #[test]
    fn test_in_memory_ui_tracks_registration() {
        let ui = InMemorySettingsUi::new();
        let panel = SettingsPanel::default();

        ui.register(&panel);
        assert!(ui.is_registered("ClipSpeak"));

        ui.unregister(&panel);
        assert!(!ui.is_registered("ClipSpeak"));

        // Unregistering twice is harmless
        ui.unregister(&panel);
        assert_eq!(ui.registered_count(), 0);
    }
}
