//! Clipboard inspection for ClipSpeak.
//!
//! Answers two questions for the announcement engine, both through the
//! [`ClipboardPort`] seam:
//! - did the clipboard change since the last look (signature comparison)
//! - what does it hold now, in spoken terms ("text", "3 items", "data")
//!
//! Reading is the only side effect; nothing here writes the clipboard.

mod content;
mod port;
mod state;

pub use content::{ClipboardContent, ClipboardContentType, Signature};
pub use port::{ClipboardPort, ClipboardRef, InMemoryClipboard, NullClipboard, SystemClipboard};
pub use state::ClipboardState;
