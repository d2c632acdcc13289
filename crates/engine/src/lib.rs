//! Announcement pipeline for clipboard gestures.
//!
//! Sits between the host screen reader's input layer and its speech output.
//! Each intercepted chord flows strictly upward:
//!
//! ```text
//! keystroke
//!    │
//!    ▼
//! pass-through check ──── bound script? ──── invoke, stay quiet
//!    │
//!    ▼ (forwarded raw)
//! focus classification
//!    │
//!    ▼
//! validation against clipboard transition
//!    │
//!    ▼
//! message synthesis ──► speech
//! ```
//!
//! Wrong silence beats wrong speech: every ambiguous state along the way
//! suppresses the announcement instead of guessing.
//!
//! # Example
//!
//! ```
//! use clipspeak_engine::{HostPorts, InMemoryDispatch, InMemorySettingsUi, Plugin, SettingsStore};
//! use clipspeak_clipboard::InMemoryClipboard;
//! use clipspeak_focus::{ControlRole, FocusSnapshot, InMemoryFocusProvider, StateFlags};
//! use clipspeak_input::{InMemoryForwarder, KeyChord};
//! use clipspeak_speech::InMemorySpeech;
//! use std::sync::Arc;
//!
//! let focus = Arc::new(InMemoryFocusProvider::new());
//! let speech = Arc::new(InMemorySpeech::new());
//! let dir = tempfile::tempdir().unwrap();
//!
//! let mut plugin = Plugin::with_store(
//!     HostPorts {
//!         focus: Arc::clone(&focus) as _,
//!         clipboard: Arc::new(InMemoryClipboard::new()),
//!         speech: Arc::clone(&speech) as _,
//!         dispatch: Arc::new(InMemoryDispatch::new()),
//!         forwarder: Arc::new(InMemoryForwarder::new()),
//!         settings_ui: Arc::new(InMemorySettingsUi::new()),
//!     },
//!     SettingsStore::new(dir.path().join("settings.json")),
//! );
//!
//! focus.focus(FocusSnapshot::new(
//!     "Edit",
//!     "notepad",
//!     ControlRole::EditableText,
//!     StateFlags { editable: true, ..StateFlags::default() },
//! ));
//! plugin.handle_gesture(&KeyChord::control('z'));
//! assert_eq!(speech.last().as_deref(), Some("Undo"));
//! ```

mod dispatch;
mod engine;
mod panel;
mod plugin;
mod settings;
pub mod validate;

pub use dispatch::{HostDispatch, HostDispatchRef, InMemoryDispatch, NullHostDispatch};
pub use engine::{AnnouncementEngine, CLIPBOARD_SETTLE_MS};
pub use panel::{InMemorySettingsUi, NullSettingsUi, SettingsPanel, SettingsUi, SettingsUiRef};
pub use plugin::{HostPorts, Plugin};
pub use settings::{Settings, SettingsError, SettingsStore};
