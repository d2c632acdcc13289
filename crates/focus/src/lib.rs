//! Focused-control classification for ClipSpeak.
//!
//! Decides what kind of clipboard target currently has focus and remembers
//! the previous answer, so the engine can judge whether an operation on the
//! clipboard is plausible in context.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                            │
//! │  category.rs - ContentCategory enum                         │
//! │  classify.rs - ordered classification heuristic (pure)      │
//! │  history.rs  - two-slot category shift register             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Host Boundary                              │
//! │  snapshot.rs - FocusSnapshot shape supplied by the host     │
//! │  provider.rs - FocusProvider trait + test doubles           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use clipspeak_focus::{classify, ContentCategory, ControlRole, FocusSnapshot, StateFlags};
//!
//! let focus = FocusSnapshot::new(
//!     "Edit",
//!     "notepad",
//!     ControlRole::Unknown,
//!     StateFlags { editable: true, ..Default::default() },
//! );
//! assert_eq!(classify(Some(&focus)), ContentCategory::PlainText);
//! ```

mod category;
mod classify;
mod history;
mod provider;
mod snapshot;

pub use category::ContentCategory;
pub use classify::{
    classify, is_file_list_class, is_file_manager_app, is_rich_text_class,
    is_word_processor_app, is_word_processor_class, FILE_LIST_CLASSES, FILE_MANAGER_APPS,
    RICH_TEXT_CLASSES, WORD_PROCESSOR_APPS, WORD_PROCESSOR_CLASSES,
};
pub use history::FocusHistory;
pub use provider::{FocusProvider, FocusProviderRef, InMemoryFocusProvider, NullFocusProvider};
pub use snapshot::{ControlRole, FocusSnapshot, StateFlags};
