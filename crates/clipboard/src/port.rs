//! Clipboard access ports.
//!
//! The engine only ever reads the clipboard through [`ClipboardPort`], so
//! tests run against [`InMemoryClipboard`] and an embedding host can supply
//! its own implementation with richer format support.

use std::sync::{Arc, Mutex};

use crate::content::ClipboardContent;

/// Read access to the clipboard.
pub trait ClipboardPort: Send + Sync {
    /// Current clipboard payload.
    ///
    /// Implementations fold read failures into [`ClipboardContent::Empty`];
    /// this call never errors.
    fn read(&self) -> ClipboardContent;
}

/// Type alias for shared clipboard port reference.
pub type ClipboardRef = Arc<dyn ClipboardPort>;

/// System clipboard backed by arboard.
///
/// arboard exposes text and images, not file lists, so file payloads are only
/// visible to hosts that provide their own [`ClipboardPort`]. Image payloads
/// are folded to [`ClipboardContent::Other`].
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardPort for SystemClipboard {
    fn read(&self) -> ClipboardContent {
        let Ok(mut clipboard) = arboard::Clipboard::new() else {
            tracing::trace!("system clipboard unavailable");
            return ClipboardContent::Empty;
        };
        if let Ok(text) = clipboard.get_text() {
            if text.is_empty() {
                return ClipboardContent::Empty;
            }
            return ClipboardContent::Text(text);
        }
        if clipboard.get_image().is_ok() {
            return ClipboardContent::Other;
        }
        ClipboardContent::Empty
    }
}

/// Settable clipboard for tests.
#[derive(Default)]
pub struct InMemoryClipboard {
    content: Mutex<ClipboardContent>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored payload.
    pub fn set(&self, content: ClipboardContent) {
        *self.content.lock().expect("clipboard mutex poisoned") = content;
    }

    pub fn set_text(&self, text: &str) {
        self.set(ClipboardContent::Text(text.to_string()));
    }

    pub fn set_files(&self, paths: &[&str]) {
        self.set(ClipboardContent::Files(
            paths.iter().map(std::path::PathBuf::from).collect(),
        ));
    }

    pub fn clear(&self) {
        self.set(ClipboardContent::Empty);
    }
}

impl ClipboardPort for InMemoryClipboard {
    fn read(&self) -> ClipboardContent {
        self.content.lock().expect("clipboard mutex poisoned").clone()
    }
}

/// Clipboard that is always empty.
pub struct NullClipboard;

impl ClipboardPort for NullClipboard {
    fn read(&self) -> ClipboardContent {
        ClipboardContent::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_clipboard_roundtrip() {
        let clipboard = InMemoryClipboard::new();
        assert_eq!(clipboard.read(), ClipboardContent::Empty);

        clipboard.set_text("hello");
        assert_eq!(clipboard.read(), ClipboardContent::Text("hello".to_string()));

        clipboard.set_files(&["/tmp/a", "/tmp/b"]);
        assert_eq!(clipboard.read().word(), "2 items");

        clipboard.clear();
        assert_eq!(clipboard.read(), ClipboardContent::Empty);
    }

    #[test]
    fn test_null_clipboard_is_empty() {
        assert_eq!(NullClipboard.read(), ClipboardContent::Empty);
    }
}
