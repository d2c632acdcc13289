//! Content categories for focused controls.

use std::fmt;

/// Clipboard eligibility of the focused control.
///
/// An immutable snapshot value computed once per examination, not a live
/// handle. [`FocusHistory`](crate::FocusHistory) keeps the previous value for
/// paste plausibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentCategory {
    /// Control type does not suggest clipboard operations.
    #[default]
    None,

    /// Editable text field.
    PlainText,

    /// Text that can be read and copied but not modified.
    ReadOnlyText,

    /// Selected file entries in a file-manager list.
    File,

    /// File-manager list entry that is selectable but not currently selected.
    FileSelectable,

    /// Selected item in a generic list or table.
    ListItem,

    /// Recognized control with no specific clipboard handling.
    Other,
}

impl ContentCategory {
    /// Returns a human-readable label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PlainText => "text",
            Self::ReadOnlyText => "read-only text",
            Self::File => "file",
            Self::FileSelectable => "selectable file",
            Self::ListItem => "list item",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
