//! Clipboard payload classification and fingerprinting.

use std::fmt;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

/// Payload read from the clipboard, as reported by a clipboard port.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClipboardContent {
    /// Clipboard is empty or could not be read.
    #[default]
    Empty,

    /// Plain text.
    Text(String),

    /// One or more file paths copied from a file manager.
    Files(Vec<PathBuf>),

    /// A format this system does not inspect further (images, rich formats).
    Other,
}

/// Broad kind of clipboard content, as spoken feedback cares about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ClipboardContentType {
    Other = 0,
    Files = 1,
    Text = 2,
    None,
}

impl ClipboardContentType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Other => "other",
            Self::Files => "files",
            Self::Text => "text",
            Self::None => "none",
        }
    }
}

impl fmt::Display for ClipboardContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl ClipboardContent {
    pub fn content_type(&self) -> ClipboardContentType {
        match self {
            Self::Empty => ClipboardContentType::None,
            Self::Text(_) => ClipboardContentType::Text,
            Self::Files(_) => ClipboardContentType::Files,
            Self::Other => ClipboardContentType::Other,
        }
    }

    /// Short spoken label for the payload ("text", "3 items", "data").
    pub fn word(&self) -> String {
        match self {
            Self::Text(_) => "text".to_string(),
            Self::Files(paths) if paths.len() == 1 => "1 item".to_string(),
            Self::Files(paths) => format!("{} items", paths.len()),
            Self::Other => "data".to_string(),
            Self::Empty => String::new(),
        }
    }

    /// Classify the payload into `(kind, spoken label)`.
    pub fn describe(&self) -> (ClipboardContentType, String) {
        (self.content_type(), self.word())
    }

    /// Compute a fingerprint for change detection.
    ///
    /// Combines byte length with a type-tagged SHA-256 so that replacing
    /// content with different content of the same apparent size still
    /// registers as a change.
    pub fn signature(&self) -> Signature {
        let mut hasher = Sha256::new();
        match self {
            Self::Text(text) => {
                hasher.update(b"text:");
                hasher.update(text.as_bytes());
            }
            Self::Files(paths) => {
                hasher.update(b"files:");
                // Sorted so reordering the same selection is not a change.
                let mut sorted: Vec<_> = paths
                    .iter()
                    .map(|p| p.to_string_lossy().to_string())
                    .collect();
                sorted.sort();
                for p in &sorted {
                    hasher.update(p.as_bytes());
                    hasher.update(b"\0");
                }
            }
            Self::Other => {
                hasher.update(b"other");
            }
            Self::Empty => {
                hasher.update(b"empty");
            }
        }
        Signature {
            byte_len: self.byte_size(),
            digest: format!("{:x}", hasher.finalize()),
        }
    }

    /// Byte size estimate for the payload.
    pub fn byte_size(&self) -> usize {
        match self {
            Self::Text(t) => t.len(),
            Self::Files(paths) => paths.iter().map(|p| p.to_string_lossy().len()).sum(),
            Self::Other | Self::Empty => 0,
        }
    }
}

/// Cheaply comparable fingerprint of clipboard content.
///
/// Equality is the only supported question; the fields never leave the
/// process and carry no payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    byte_len: usize,
    digest: String,
}

// Spoken feedback must never leak clipboard contents into logs, so the
// Display form carries kind and size only.
impl fmt::Display for ClipboardContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(t) => write!(f, "Text({} bytes)", t.len()),
            Self::Files(paths) => write!(f, "Files({} item(s))", paths.len()),
            Self::Other => write!(f, "Other"),
            Self::Empty => write!(f, "Empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(paths: &[&str]) -> ClipboardContent {
        ClipboardContent::Files(paths.iter().map(PathBuf::from).collect())
    }

    #[test]
    fn test_word_for_text() {
        let content = ClipboardContent::Text("hello".to_string());
        assert_eq!(content.word(), "text");
        assert_eq!(content.content_type(), ClipboardContentType::Text);
    }

    #[test]
    fn test_word_pluralizes_file_count() {
        assert_eq!(files(&["/tmp/a"]).word(), "1 item");
        assert_eq!(files(&["/tmp/a", "/tmp/b", "/tmp/c"]).word(), "3 items");
    }

    #[test]
    fn test_word_for_empty_and_other() {
        assert_eq!(ClipboardContent::Empty.word(), "");
        assert_eq!(ClipboardContent::Other.word(), "data");
    }

    #[test]
    fn test_content_type_codes() {
        assert_eq!(ClipboardContentType::Other as u8, 0);
        assert_eq!(ClipboardContentType::Files as u8, 1);
        assert_eq!(ClipboardContentType::Text as u8, 2);
    }

    #[test]
    fn test_signature_stable_for_same_content() {
        let a = ClipboardContent::Text("hello".to_string());
        let b = ClipboardContent::Text("hello".to_string());
        assert_eq!(a.signature(), b.signature());
    }

    #[test]
    fn test_signature_detects_same_length_replacement() {
        let a = ClipboardContent::Text("abcde".to_string());
        let b = ClipboardContent::Text("vwxyz".to_string());
        assert_eq!(a.byte_size(), b.byte_size());
        assert_ne!(a.signature(), b.signature());
    }

    #[test]
    fn test_signature_distinguishes_kinds() {
        // A path copied as text and the same path copied as a file entry
        // are different clipboard states.
        let as_text = ClipboardContent::Text("/tmp/a".to_string());
        let as_file = files(&["/tmp/a"]);
        assert_ne!(as_text.signature(), as_file.signature());
    }

    #[test]
    fn test_signature_ignores_file_order() {
        let forward = files(&["/tmp/a", "/tmp/b"]);
        let backward = files(&["/tmp/b", "/tmp/a"]);
        assert_eq!(forward.signature(), backward.signature());
    }

    #[test]
    fn test_signature_empty_differs_from_other() {
        assert_ne!(
            ClipboardContent::Empty.signature(),
            ClipboardContent::Other.signature()
        );
    }

    #[test]
    fn test_display_hides_payload() {
        let content = ClipboardContent::Text("a secret password".to_string());
        let rendered = format!("{content}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("17 bytes"));
    }
}
