//! Point-in-time clipboard state and change detection.

use crate::content::{ClipboardContent, ClipboardContentType, Signature};
use crate::port::ClipboardPort;

/// Snapshot of the clipboard at one point in time.
///
/// Produced fresh on each query, compared by signature, and discarded when
/// the operation that captured it completes. Never cached across operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardState {
    /// Broad kind of content held.
    pub content_type: ClipboardContentType,
    /// Short spoken label for the payload ("text", "3 items", ...).
    pub description: String,
    /// Fingerprint used to answer "did the clipboard change".
    pub signature: Signature,
}

impl ClipboardState {
    /// Read the clipboard through `port` and classify what it holds.
    ///
    /// Never fails: an unreadable or empty clipboard yields a state with
    /// [`ClipboardContentType::None`].
    pub fn capture(port: &dyn ClipboardPort) -> Self {
        let state = Self::from_content(&port.read());
        tracing::trace!(content_type = %state.content_type, "captured clipboard state");
        state
    }

    pub fn from_content(content: &ClipboardContent) -> Self {
        let (content_type, description) = content.describe();
        Self {
            content_type,
            description,
            signature: content.signature(),
        }
    }

    /// Whether the clipboard was replaced since `previous` was captured.
    pub fn has_changed(&self, previous: &ClipboardState) -> bool {
        self.signature != previous.signature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::{InMemoryClipboard, NullClipboard};

    #[test]
    fn test_capture_of_empty_clipboard_never_fails() {
        let state = ClipboardState::capture(&NullClipboard);
        assert_eq!(state.content_type, ClipboardContentType::None);
        assert_eq!(state.description, "");
    }

    #[test]
    fn test_unchanged_between_captures() {
        let clipboard = InMemoryClipboard::new();
        clipboard.set_text("hello");

        let before = ClipboardState::capture(&clipboard);
        let after = ClipboardState::capture(&clipboard);
        assert!(!after.has_changed(&before));
    }

    #[test]
    fn test_change_detected_after_write() {
        let clipboard = InMemoryClipboard::new();
        let before = ClipboardState::capture(&clipboard);

        clipboard.set_text("fresh");
        let after = ClipboardState::capture(&clipboard);
        assert!(after.has_changed(&before));
        assert_eq!(after.content_type, ClipboardContentType::Text);
        assert_eq!(after.description, "text");
    }

    #[test]
    fn test_change_detected_for_same_length_text() {
        let clipboard = InMemoryClipboard::new();
        clipboard.set_text("abcde");
        let before = ClipboardState::capture(&clipboard);

        clipboard.set_text("fghij");
        let after = ClipboardState::capture(&clipboard);
        assert!(after.has_changed(&before));
    }

    #[test]
    fn test_file_state_describes_count() {
        let clipboard = InMemoryClipboard::new();
        clipboard.set_files(&["/tmp/a", "/tmp/b", "/tmp/c"]);

        let state = ClipboardState::capture(&clipboard);
        assert_eq!(state.content_type, ClipboardContentType::Files);
        assert_eq!(state.description, "3 items");
    }
}
