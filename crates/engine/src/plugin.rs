//! Add-on lifecycle: wiring, bindings, settings panel, secure mode.

use crate::dispatch::HostDispatchRef;
use crate::engine::AnnouncementEngine;
use crate::panel::{SettingsPanel, SettingsUiRef};
use crate::settings::{Settings, SettingsError, SettingsStore};
use clipspeak_clipboard::ClipboardRef;
use clipspeak_focus::FocusProviderRef;
use clipspeak_input::{operation_for, GestureBinding, KeyChord, KeyForwarderRef, DEFAULT_BINDINGS};
use clipspeak_speech::SpeechRef;
use std::time::Duration;
use tracing::{debug, info};

/// Everything the host must supply for the add-on to run.
pub struct HostPorts {
    pub focus: FocusProviderRef,
    pub clipboard: ClipboardRef,
    pub speech: SpeechRef,
    pub dispatch: HostDispatchRef,
    pub forwarder: KeyForwarderRef,
    pub settings_ui: SettingsUiRef,
}

/// The add-on as the host sees it: gesture bindings in, announcements out.
///
/// On a secure desktop the plugin loads inert: no bindings, no settings
/// panel, no announcements. Clipboard contents must not be disclosed on
/// login and lock screens.
pub struct Plugin {
    engine: Option<AnnouncementEngine>,
    settings_ui: SettingsUiRef,
    panel: SettingsPanel,
    store: SettingsStore,
    settings: Settings,
    panel_registered: bool,
}

impl Plugin {
    /// Start the add-on with settings at the default per-user location.
    pub fn new(ports: HostPorts) -> Self {
        Self::with_store(ports, SettingsStore::open_default())
    }

    /// Start the add-on with an explicit settings store.
    pub fn with_store(ports: HostPorts, store: SettingsStore) -> Self {
        let settings = store.load();

        if ports.dispatch.is_secure() {
            info!("secure desktop, clipboard announcements disabled");
            return Self {
                engine: None,
                settings_ui: ports.settings_ui,
                panel: SettingsPanel::clipspeak(),
                store,
                settings,
                panel_registered: false,
            };
        }

        let mut engine = AnnouncementEngine::new(
            ports.focus,
            ports.clipboard,
            ports.speech,
            ports.dispatch,
            ports.forwarder,
        );
        engine.set_settings(settings);

        let panel = SettingsPanel::clipspeak();
        ports.settings_ui.register(&panel);
        info!(announce = settings.announce, "clipboard announcements ready");

        Self {
            engine: Some(engine),
            settings_ui: ports.settings_ui,
            panel,
            store,
            settings,
            panel_registered: true,
        }
    }

    /// Replace the engine's post-keystroke settle delay.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        if let Some(engine) = self.engine.take() {
            self.engine = Some(engine.with_settle_delay(delay));
        }
        self
    }

    /// Whether the add-on intercepts gestures in this session.
    pub fn is_active(&self) -> bool {
        self.engine.is_some()
    }

    /// Gesture bindings the host should register. Empty on secure desktops.
    pub fn bindings(&self) -> &'static [GestureBinding] {
        if self.is_active() {
            DEFAULT_BINDINGS
        } else {
            &[]
        }
    }

    /// Process an intercepted chord. Returns `false` when the chord maps to
    /// no clipboard operation (or the add-on is inert) and the host should
    /// proceed with its own handling.
    pub fn handle_gesture(&mut self, chord: &KeyChord) -> bool {
        let Some(engine) = self.engine.as_mut() else {
            return false;
        };
        let Some(op) = operation_for(chord) else {
            debug!(chord = %chord, "chord not bound to a clipboard operation");
            return false;
        };

        engine.handle(op, chord);
        true
    }

    pub fn announce(&self) -> bool {
        self.settings.announce
    }

    /// Flip the announce option and persist it.
    pub fn set_announce(&mut self, announce: bool) -> Result<(), SettingsError> {
        self.settings.announce = announce;
        if let Some(engine) = self.engine.as_mut() {
            engine.set_settings(self.settings);
        }
        self.store.save(&self.settings)
    }

    /// Tear down host-facing surfaces. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if self.panel_registered {
            self.settings_ui.unregister(&self.panel);
            self.panel_registered = false;
        }
        self.engine = None;
        debug!("plugin shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::InMemoryDispatch;
    use crate::panel::InMemorySettingsUi;
    use clipspeak_clipboard::InMemoryClipboard;
    use clipspeak_focus::InMemoryFocusProvider;
    use clipspeak_input::InMemoryForwarder;
    use clipspeak_speech::InMemorySpeech;
    use std::sync::Arc;

    struct Harness {
        speech: Arc<InMemorySpeech>,
        forwarder: Arc<InMemoryForwarder>,
        settings_ui: Arc<InMemorySettingsUi>,
        ports: HostPorts,
    }

    fn make_harness(dispatch: Arc<InMemoryDispatch>) -> Harness {
        let speech = Arc::new(InMemorySpeech::new());
        let forwarder = Arc::new(InMemoryForwarder::new());
        let settings_ui = Arc::new(InMemorySettingsUi::new());
        let ports = HostPorts {
            focus: Arc::new(InMemoryFocusProvider::new()),
            clipboard: Arc::new(InMemoryClipboard::new()),
            speech: Arc::clone(&speech) as _,
            dispatch: dispatch as _,
            forwarder: Arc::clone(&forwarder) as _,
            settings_ui: Arc::clone(&settings_ui) as _,
        };
        Harness {
            speech,
            forwarder,
            settings_ui,
            ports,
        }
    }

    fn make_store() -> (tempfile::TempDir, SettingsStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        (dir, store)
    }

    #[test]
    fn test_startup_registers_panel_and_bindings() {
        let harness = make_harness(Arc::new(InMemoryDispatch::new()));
        let (_dir, store) = make_store();

        let plugin = Plugin::with_store(harness.ports, store);
        assert!(plugin.is_active());
        assert_eq!(plugin.bindings().len(), 6);
        assert!(harness.settings_ui.is_registered("ClipSpeak"));
    }

    #[test]
    fn test_secure_desktop_loads_inert() {
        let harness = make_harness(Arc::new(InMemoryDispatch::secure()));
        let (_dir, store) = make_store();

        let mut plugin = Plugin::with_store(harness.ports, store);
        assert!(!plugin.is_active());
        assert!(plugin.bindings().is_empty());
        assert!(!harness.settings_ui.is_registered("ClipSpeak"));

        assert!(!plugin.handle_gesture(&KeyChord::control('c')));
        assert!(harness.speech.is_empty());
        assert!(harness.forwarder.is_empty());
    }

    #[test]
    fn test_unmapped_chord_is_declined() {
        let harness = make_harness(Arc::new(InMemoryDispatch::new()));
        let (_dir, store) = make_store();

        let mut plugin =
            Plugin::with_store(harness.ports, store).with_settle_delay(Duration::ZERO);
        assert!(!plugin.handle_gesture(&KeyChord::control('q')));
        assert!(harness.forwarder.is_empty());
    }

    #[test]
    fn test_mapped_chord_is_forwarded_even_when_silent() {
        let harness = make_harness(Arc::new(InMemoryDispatch::new()));
        let (_dir, store) = make_store();

        let mut plugin =
            Plugin::with_store(harness.ports, store).with_settle_delay(Duration::ZERO);
        // No focus, no clipboard change: silent, but the keystroke goes out.
        assert!(plugin.handle_gesture(&KeyChord::control('c')));
        assert_eq!(harness.forwarder.sent(), vec![KeyChord::control('c')]);
        assert!(harness.speech.is_empty());
    }

    #[test]
    fn test_set_announce_persists() {
        let harness = make_harness(Arc::new(InMemoryDispatch::new()));
        let (_dir, store) = make_store();

        let mut plugin = Plugin::with_store(harness.ports, store.clone());
        assert!(plugin.announce());

        plugin.set_announce(false).unwrap();
        assert!(!plugin.announce());
        assert!(!store.load().announce);
    }

    #[test]
    fn test_settings_loaded_at_startup() {
        let harness = make_harness(Arc::new(InMemoryDispatch::new()));
        let (_dir, store) = make_store();
        store.save(&Settings { announce: false }).unwrap();

        let plugin = Plugin::with_store(harness.ports, store);
        assert!(!plugin.announce());
    }

    #[test]
    fn test_shutdown_unregisters_panel_once() {
        let harness = make_harness(Arc::new(InMemoryDispatch::new()));
        let (_dir, store) = make_store();

        let mut plugin = Plugin::with_store(harness.ports, store);
        plugin.shutdown();
        assert!(!harness.settings_ui.is_registered("ClipSpeak"));
        assert!(!plugin.is_active());

        // Second shutdown is a no-op
        plugin.shutdown();
        assert_eq!(harness.settings_ui.registered_count(), 0);
    }
}
