//! Example: Drive the announcement engine through a scripted session.
//!
//! Run with: cargo run -p clipspeak-engine --example announce_demo

use clipspeak_clipboard::{ClipboardContent, InMemoryClipboard};
use clipspeak_engine::{AnnouncementEngine, InMemoryDispatch, Settings};
use clipspeak_focus::{ControlRole, FocusSnapshot, InMemoryFocusProvider, StateFlags};
use clipspeak_input::{InputError, KeyChord, KeyForwarder, OperationKind};
use clipspeak_speech::InMemorySpeech;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Stands in for the focused application: when the chord arrives it performs
/// the clipboard write the real application would perform.
struct ScriptedApp {
    clipboard: Arc<InMemoryClipboard>,
    pending_write: Mutex<Option<ClipboardContent>>,
}

impl ScriptedApp {
    fn new(clipboard: Arc<InMemoryClipboard>) -> Self {
        Self {
            clipboard,
            pending_write: Mutex::new(None),
        }
    }

    fn will_write(&self, content: ClipboardContent) {
        *self.pending_write.lock().unwrap() = Some(content);
    }
}

impl KeyForwarder for ScriptedApp {
    fn forward(&self, _chord: &KeyChord) -> Result<(), InputError> {
        if let Some(content) = self.pending_write.lock().unwrap().take() {
            self.clipboard.set(content);
        }
        Ok(())
    }
}

fn editor() -> FocusSnapshot {
    FocusSnapshot::new(
        "Edit",
        "notepad",
        ControlRole::EditableText,
        StateFlags {
            editable: true,
            multiline: true,
            ..StateFlags::default()
        },
    )
}

fn viewer() -> FocusSnapshot {
    FocusSnapshot::new(
        "Edit",
        "notepad",
        ControlRole::EditableText,
        StateFlags {
            multiline: true,
            read_only: true,
            ..StateFlags::default()
        },
    )
}

fn explorer_item() -> FocusSnapshot {
    FocusSnapshot::new(
        "DirectUIHWND",
        "explorer",
        ControlRole::ListItem,
        StateFlags {
            selected: true,
            selectable: true,
            ..StateFlags::default()
        },
    )
}

fn report(step: &str, speech: &InMemorySpeech) {
    match speech.last() {
        Some(utterance) => println!("{step:44} -> \"{utterance}\""),
        None => println!("{step:44} -> (silent)"),
    }
    speech.clear();
}

fn main() {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter("clipspeak_engine=debug")
        .init();

    println!("=== Clipboard Announcement Example ===\n");

    let focus = Arc::new(InMemoryFocusProvider::new());
    let clipboard = Arc::new(InMemoryClipboard::new());
    let speech = Arc::new(InMemorySpeech::new());
    let app = Arc::new(ScriptedApp::new(Arc::clone(&clipboard)));

    let mut engine = AnnouncementEngine::new(
        Arc::clone(&focus) as _,
        Arc::clone(&clipboard) as _,
        Arc::clone(&speech) as _,
        Arc::new(InMemoryDispatch::new()),
        Arc::clone(&app) as _,
    )
    .with_settle_delay(Duration::ZERO);

    focus.focus(editor());
    app.will_write(ClipboardContent::Text("hello world".to_string()));
    engine.handle(OperationKind::Copy, &KeyChord::control('c'));
    report("copy selection in editor", &speech);

    engine.handle(OperationKind::Paste, &KeyChord::control('v'));
    report("paste into editor", &speech);

    // Include content descriptions from here on
    engine.set_settings(Settings { announce: false });
    app.will_write(ClipboardContent::Text("second selection".to_string()));
    engine.handle(OperationKind::Copy, &KeyChord::control('c'));
    report("copy again, detail enabled", &speech);

    focus.focus(explorer_item());
    app.will_write(ClipboardContent::Files(vec![
        PathBuf::from("/home/user/a.txt"),
        PathBuf::from("/home/user/b.txt"),
        PathBuf::from("/home/user/c.txt"),
    ]));
    engine.handle(OperationKind::Cut, &KeyChord::control('x'));
    report("cut three files in the file manager", &speech);

    focus.focus(viewer());
    engine.handle(OperationKind::Undo, &KeyChord::control('z'));
    report("undo in a read-only viewer", &speech);

    focus.focus(editor());
    engine.handle(OperationKind::Undo, &KeyChord::control('z'));
    report("undo back in the editor", &speech);

    println!("\nDone.");
}
