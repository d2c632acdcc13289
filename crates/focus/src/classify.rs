//! Focused-control classification.
//!
//! Pure domain logic - no I/O, no host dependencies.

use crate::category::ContentCategory;
use crate::snapshot::{ControlRole, FocusSnapshot, StateFlags};

/// Window classes of explorer-style file lists.
pub const FILE_LIST_CLASSES: &[&str] = &["DirectUIHWND", "SysListView32"];

/// Window classes of rich-text and code-editor controls. These accept paste
/// even when no editable state is reported.
pub const RICH_TEXT_CLASSES: &[&str] = &["RichEditD2DPT", "Scintilla"];

/// Window class of the word-processor document canvas.
pub const WORD_PROCESSOR_CLASSES: &[&str] = &["_WwG"];

/// Applications that announce their own clipboard operations.
pub const WORD_PROCESSOR_APPS: &[&str] = &["winword", "outlook"];

/// Applications recognized as file managers.
pub const FILE_MANAGER_APPS: &[&str] = &["explorer"];

pub fn is_file_list_class(window_class: &str) -> bool {
    FILE_LIST_CLASSES.iter().any(|&c| c == window_class)
}

pub fn is_rich_text_class(window_class: &str) -> bool {
    RICH_TEXT_CLASSES.iter().any(|&c| c == window_class)
}

pub fn is_word_processor_class(window_class: &str) -> bool {
    WORD_PROCESSOR_CLASSES.iter().any(|&c| c == window_class)
}

pub fn is_word_processor_app(app_name: &str) -> bool {
    WORD_PROCESSOR_APPS.iter().any(|&a| a == app_name)
}

pub fn is_file_manager_app(app_name: &str) -> bool {
    FILE_MANAGER_APPS.iter().any(|&a| a == app_name)
}

/// Classify the focused control's clipboard eligibility.
///
/// Ordered checks, first match wins:
/// 1. File-list window classes, split on selected/selectable. A file list
///    with neither state falls through to the generic checks.
/// 2. Selected list items and table rows.
/// 3. Multiline or editable state, split on read-only.
/// 4. Editable-text role, same split (not every editable control reports an
///    editable state).
/// 5. Rich-text and code-editor window classes.
/// 6. The word-processor canvas, unless the owning application announces its
///    own clipboard operations.
///
/// Absence of focus classifies as `None`; nothing here errors.
pub fn classify(focus: Option<&FocusSnapshot>) -> ContentCategory {
    let Some(focus) = focus else {
        return ContentCategory::None;
    };
    let states = &focus.states;

    if is_file_list_class(&focus.window_class) {
        if states.selected {
            return ContentCategory::File;
        }
        if states.selectable {
            return ContentCategory::FileSelectable;
        }
        // Neither selected nor selectable: fall through.
    }

    if matches!(focus.role, ControlRole::ListItem | ControlRole::TableRow) && states.selected {
        return ContentCategory::ListItem;
    }

    if states.multiline || states.editable {
        return text_category(states);
    }

    if focus.role == ControlRole::EditableText {
        return text_category(states);
    }

    if is_rich_text_class(&focus.window_class) {
        return ContentCategory::PlainText;
    }

    if is_word_processor_class(&focus.window_class) {
        if is_word_processor_app(&focus.app_name) {
            tracing::debug!(
                app = %focus.app_name,
                "application announces its own clipboard operations"
            );
            return ContentCategory::None;
        }
        return ContentCategory::PlainText;
    }

    ContentCategory::None
}

fn text_category(states: &StateFlags) -> ContentCategory {
    if states.read_only {
        ContentCategory::ReadOnlyText
    } else {
        ContentCategory::PlainText
    }
}
