//! The announcement engine: one keystroke in, at most one utterance out.

use crate::dispatch::HostDispatchRef;
use crate::settings::Settings;
use crate::validate;
use clipspeak_clipboard::{ClipboardContentType, ClipboardRef, ClipboardState};
use clipspeak_focus::{
    classify, is_word_processor_app, ContentCategory, FocusHistory, FocusProviderRef,
    FocusSnapshot,
};
use clipspeak_input::{KeyChord, KeyForwarderRef, OperationKind};
use clipspeak_speech::{message, SpeechRef};
use std::time::Duration;
use tracing::{debug, warn};

/// Delay between forwarding a clipboard keystroke and re-reading the
/// clipboard (60ms). The application needs time to complete the mutation.
pub const CLIPBOARD_SETTLE_MS: u64 = 60;

/// Turns intercepted clipboard gestures into spoken announcements.
///
/// The engine is single-writer state driven synchronously from the host's
/// keystroke events; each call to [`handle`] runs to completion before the
/// next gesture of interest arrives.
///
/// [`handle`]: AnnouncementEngine::handle
pub struct AnnouncementEngine {
    focus: FocusProviderRef,
    clipboard: ClipboardRef,
    speech: SpeechRef,
    dispatch: HostDispatchRef,
    forwarder: KeyForwarderRef,
    history: FocusHistory,
    settings: Settings,
    settle_delay: Duration,
}

impl AnnouncementEngine {
    pub fn new(
        focus: FocusProviderRef,
        clipboard: ClipboardRef,
        speech: SpeechRef,
        dispatch: HostDispatchRef,
        forwarder: KeyForwarderRef,
    ) -> Self {
        Self {
            focus,
            clipboard,
            speech,
            dispatch,
            forwarder,
            history: FocusHistory::default(),
            settings: Settings::default(),
            settle_delay: Duration::from_millis(CLIPBOARD_SETTLE_MS),
        }
    }

    /// Replace the post-keystroke settle delay. Tests pass
    /// [`Duration::ZERO`] so scenarios run instantly.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn history(&self) -> &FocusHistory {
        &self.history
    }

    /// Process one intercepted gesture.
    ///
    /// Delivers the keystroke (via the bound script, the word processor's
    /// selection API, or raw forwarding), reclassifies the focus, validates
    /// the operation against the clipboard transition and speaks at most one
    /// message.
    pub fn handle(&mut self, op: OperationKind, chord: &KeyChord) {
        debug!(op = %op, chord = %chord, "handling gesture");

        // Snapshot the clipboard before the keystroke lands so the change
        // check has something to compare against.
        let baseline = if op.touches_clipboard() {
            Some(ClipboardState::capture(self.clipboard.as_ref()))
        } else {
            None
        };

        let focus_before = self.focus.focused_element();
        if !self.dispatch_chord(op, chord, focus_before.as_ref()) {
            return;
        }

        if op.touches_clipboard() && !self.settle_delay.is_zero() {
            std::thread::sleep(self.settle_delay);
        }

        // Reclassify after the keystroke so history reflects the element the
        // operation actually ran against.
        let focus = self.focus.focused_element();
        let category = classify(focus.as_ref());
        self.history.record(category);

        if category == ContentCategory::None {
            debug!(op = %op, "focus not classifiable, staying quiet");
            return;
        }

        let current = match &baseline {
            Some(_) => Some(ClipboardState::capture(self.clipboard.as_ref())),
            None => None,
        };
        let changed = match (&baseline, &current) {
            (Some(before), Some(after)) => after.has_changed(before),
            _ => false,
        };

        let plausible = match op {
            OperationKind::Undo | OperationKind::Redo => validate::can_undo_redo(category),
            OperationKind::Cut => validate::can_cut(category, changed),
            OperationKind::Copy => validate::can_copy(changed),
            OperationKind::CopyAsPath => validate::can_copy_as_path(category, changed),
            OperationKind::Paste => validate::can_paste(&self.history, focus.as_ref()),
        };
        if !plausible {
            debug!(op = %op, category = %category, changed, "announcement suppressed");
            return;
        }

        if let Some(text) = message_for(op, category, current.as_ref(), self.settings.announce) {
            debug!(op = %op, category = %category, "announcing");
            self.speech.speak(&text);
        }
    }

    /// Deliver the chord. Returns `false` when a script bound on the focused
    /// element consumed it, which ends the operation without announcing.
    fn dispatch_chord(
        &self,
        op: OperationKind,
        chord: &KeyChord,
        focus: Option<&FocusSnapshot>,
    ) -> bool {
        if self.dispatch.has_bound_script(chord) {
            let word_processor = match focus {
                Some(snapshot) => is_word_processor_app(&snapshot.app_name),
                None => false,
            };

            if word_processor && matches!(op, OperationKind::Copy | OperationKind::Paste) {
                // Generic script resolution misbehaves inside word processor
                // frames. Drive the application's own selection API and keep
                // going so the operation still gets announced.
                let handled = if op == OperationKind::Copy {
                    self.dispatch.selection_copy()
                } else {
                    self.dispatch.selection_paste()
                };
                if !handled {
                    self.forward(chord);
                }
                return true;
            }

            debug!(chord = %chord, "chord bound on focused element, deferring");
            self.dispatch.invoke_bound_script(chord);
            return false;
        }

        self.forward(chord);
        true
    }

    /// The keystroke must reach the application even when announcing fails;
    /// a swallowed keystroke breaks the user's edit, not just the feedback.
    fn forward(&self, chord: &KeyChord) {
        if let Err(e) = self.forwarder.forward(chord) {
            warn!(chord = %chord, error = %e, "failed to forward keystroke");
        }
    }
}

impl std::fmt::Debug for AnnouncementEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnouncementEngine")
            .field("history", &self.history)
            .field("settings", &self.settings)
            .field("settle_delay", &self.settle_delay)
            .finish_non_exhaustive()
    }
}

/// Chooses the utterance for a validated operation.
///
/// `None` means the focus category and the clipboard payload kind disagree,
/// which suppresses speech. `suppress_detail` drops the content word and
/// leaves the bare verb.
fn message_for(
    op: OperationKind,
    category: ContentCategory,
    clipboard: Option<&ClipboardState>,
    suppress_detail: bool,
) -> Option<String> {
    let word = |state: &ClipboardState| {
        if suppress_detail {
            String::new()
        } else {
            state.description.clone()
        }
    };

    match op {
        OperationKind::Undo => Some(message::UNDO.to_string()),
        OperationKind::Redo => Some(message::REDO.to_string()),
        OperationKind::Cut => {
            let state = clipboard?;
            match category {
                ContentCategory::PlainText | ContentCategory::File => {
                    Some(message::cut(&word(state)))
                }
                _ => None,
            }
        }
        OperationKind::Copy => {
            let state = clipboard?;
            match (category, state.content_type) {
                (
                    ContentCategory::PlainText | ContentCategory::ReadOnlyText,
                    ClipboardContentType::Text,
                ) => Some(message::copy(&word(state))),
                (ContentCategory::File, ClipboardContentType::Files) => {
                    Some(message::copy(&word(state)))
                }
                _ => None,
            }
        }
        OperationKind::CopyAsPath => {
            // The payload after a path copy is text; only the focus category
            // matters here.
            let state = clipboard?;
            if category == ContentCategory::File {
                Some(message::copy(&word(state)))
            } else {
                None
            }
        }
        OperationKind::Paste => {
            let state = clipboard?;
            match (category, state.content_type) {
                (ContentCategory::PlainText, ClipboardContentType::Text) => {
                    Some(message::pasted(&word(state)))
                }
                (ContentCategory::File, ClipboardContentType::Files) => {
                    Some(message::pasted(&word(state)))
                }
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipspeak_clipboard::ClipboardContent;

    fn text_state(text: &str) -> ClipboardState {
        ClipboardState::from_content(&ClipboardContent::Text(text.to_string()))
    }

    fn files_state(count: usize) -> ClipboardState {
        let paths: Vec<std::path::PathBuf> = (0..count)
            .map(|i| std::path::PathBuf::from(format!("/tmp/file{i}")))
            .collect();
        ClipboardState::from_content(&ClipboardContent::Files(paths))
    }

    #[test]
    fn test_undo_redo_are_bare_verbs() {
        assert_eq!(
            message_for(OperationKind::Undo, ContentCategory::PlainText, None, false),
            Some("Undo".to_string())
        );
        assert_eq!(
            message_for(OperationKind::Redo, ContentCategory::File, None, true),
            Some("Redo".to_string())
        );
    }

    #[test]
    fn test_cut_includes_content_word() {
        let state = text_state("hello");
        assert_eq!(
            message_for(
                OperationKind::Cut,
                ContentCategory::PlainText,
                Some(&state),
                false
            ),
            Some("Cut text".to_string())
        );
    }

    #[test]
    fn test_suppressed_detail_leaves_bare_verb() {
        let state = text_state("hello");
        assert_eq!(
            message_for(
                OperationKind::Cut,
                ContentCategory::PlainText,
                Some(&state),
                true
            ),
            Some("Cut".to_string())
        );
    }

    #[test]
    fn test_copy_requires_matching_payload_kind() {
        let text = text_state("hello");
        let files = files_state(3);

        assert_eq!(
            message_for(
                OperationKind::Copy,
                ContentCategory::PlainText,
                Some(&text),
                false
            ),
            Some("Copy text".to_string())
        );
        assert_eq!(
            message_for(
                OperationKind::Copy,
                ContentCategory::File,
                Some(&files),
                false
            ),
            Some("Copy 3 items".to_string())
        );
        // Category and payload disagree
        assert_eq!(
            message_for(
                OperationKind::Copy,
                ContentCategory::File,
                Some(&text),
                false
            ),
            None
        );
        assert_eq!(
            message_for(
                OperationKind::Copy,
                ContentCategory::PlainText,
                Some(&files),
                false
            ),
            None
        );
    }

    #[test]
    fn test_copy_from_read_only_text_announces() {
        let state = text_state("quoted");
        assert_eq!(
            message_for(
                OperationKind::Copy,
                ContentCategory::ReadOnlyText,
                Some(&state),
                false
            ),
            Some("Copy text".to_string())
        );
    }

    #[test]
    fn test_copy_as_path_ignores_payload_kind() {
        let state = text_state("C:\\Users\\me\\file.txt");
        assert_eq!(
            message_for(
                OperationKind::CopyAsPath,
                ContentCategory::File,
                Some(&state),
                false
            ),
            Some("Copy text".to_string())
        );
        assert_eq!(
            message_for(
                OperationKind::CopyAsPath,
                ContentCategory::PlainText,
                Some(&state),
                false
            ),
            None
        );
    }

    #[test]
    fn test_paste_agreement_table() {
        let text = text_state("hello");
        let files = files_state(1);

        assert_eq!(
            message_for(
                OperationKind::Paste,
                ContentCategory::PlainText,
                Some(&text),
                false
            ),
            Some("Pasted text".to_string())
        );
        assert_eq!(
            message_for(
                OperationKind::Paste,
                ContentCategory::File,
                Some(&files),
                false
            ),
            Some("Pasted 1 item".to_string())
        );
        assert_eq!(
            message_for(
                OperationKind::Paste,
                ContentCategory::File,
                Some(&text),
                false
            ),
            None
        );
    }
}
