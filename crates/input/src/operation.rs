//! Operation identities for keyboard-triggered actions.

use std::fmt;

/// Which keyboard-triggered action is being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Cut,
    Copy,
    CopyAsPath,
    Paste,
    Undo,
    Redo,
}

impl OperationKind {
    /// Returns a human-readable label for the operation.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cut => "cut",
            Self::Copy => "copy",
            Self::CopyAsPath => "copy as path",
            Self::Paste => "paste",
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }

    /// Whether the operation is expected to mutate the clipboard.
    ///
    /// Undo and redo are forwarded without any clipboard check, so they skip
    /// the settle delay and the before/after capture entirely.
    pub fn touches_clipboard(&self) -> bool {
        !matches!(self, Self::Undo | Self::Redo)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_ops_touch_clipboard() {
        assert!(OperationKind::Cut.touches_clipboard());
        assert!(OperationKind::Copy.touches_clipboard());
        assert!(OperationKind::CopyAsPath.touches_clipboard());
        assert!(OperationKind::Paste.touches_clipboard());
    }

    #[test]
    fn test_undo_redo_do_not_touch_clipboard() {
        assert!(!OperationKind::Undo.touches_clipboard());
        assert!(!OperationKind::Redo.touches_clipboard());
    }
}
