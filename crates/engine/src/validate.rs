//! Plausibility checks that gate every announcement.
//!
//! Each operation has one predicate. All of them resolve indeterminate
//! situations to `false`: wrong silence is less disruptive than wrong speech.

use clipspeak_focus::{
    is_file_manager_app, is_rich_text_class, is_word_processor_class, ContentCategory, ControlRole,
    FocusHistory, FocusSnapshot,
};

/// Undo and redo are announced anywhere except read-only text.
pub fn can_undo_redo(category: ContentCategory) -> bool {
    category != ContentCategory::ReadOnlyText
}

/// Cut needs a real clipboard change and a target that can actually lose
/// content.
pub fn can_cut(category: ContentCategory, clipboard_changed: bool) -> bool {
    if category == ContentCategory::ReadOnlyText {
        return false;
    }
    clipboard_changed
}

/// Copy is plausible whenever the clipboard content was replaced.
pub fn can_copy(clipboard_changed: bool) -> bool {
    clipboard_changed
}

/// Copy-as-path only applies to a selected file in a file list.
pub fn can_copy_as_path(category: ContentCategory, clipboard_changed: bool) -> bool {
    clipboard_changed && category == ContentCategory::File
}

/// Paste is judged against the category recorded *before* this operation:
/// whatever was focused when the clipboard was last populated tells us what
/// kind of payload is about to land.
pub fn can_paste(history: &FocusHistory, target: Option<&FocusSnapshot>) -> bool {
    let Some(snapshot) = target else {
        return false;
    };

    match history.previous() {
        ContentCategory::PlainText | ContentCategory::ReadOnlyText => text_paste_target(snapshot),
        ContentCategory::File | ContentCategory::FileSelectable => file_paste_target(snapshot),
        // A list item source never resolved to an announcement; neither do
        // unknown or unclassified sources.
        ContentCategory::ListItem | ContentCategory::Other | ContentCategory::None => false,
    }
}

/// Whether the focused element accepts a text paste.
fn text_paste_target(snapshot: &FocusSnapshot) -> bool {
    let states = &snapshot.states;

    if states.multiline || states.editable {
        return !states.read_only;
    }
    if snapshot.role == ControlRole::EditableText {
        return !states.read_only;
    }
    if states.read_only {
        return false;
    }
    // Rich-text and word-processor frames accept pastes without exposing an
    // editable flag.
    is_rich_text_class(&snapshot.window_class) || is_word_processor_class(&snapshot.window_class)
}

/// Whether the focused element accepts a file paste.
fn file_paste_target(snapshot: &FocusSnapshot) -> bool {
    is_file_manager_app(&snapshot.app_name)
        && snapshot.role == ControlRole::ListItem
        && snapshot.states.selectable
}
