//! Spoken message templates.
//!
//! The optional word describes clipboard content ("text", "3 items") and is
//! dropped entirely when detail suppression is on, leaving the bare verb.

/// Message spoken after an undo keystroke.
pub const UNDO: &str = "Undo";

/// Message spoken after a redo keystroke.
pub const REDO: &str = "Redo";

/// "Cut" with an optional content word ("Cut 3 items").
pub fn cut(word: &str) -> String {
    with_word("Cut", word)
}

/// "Copy" with an optional content word ("Copy text").
pub fn copy(word: &str) -> String {
    with_word("Copy", word)
}

/// "Pasted" with an optional content word ("Pasted 3 items").
pub fn pasted(word: &str) -> String {
    with_word("Pasted", word)
}

fn with_word(verb: &str, word: &str) -> String {
    if word.is_empty() {
        verb.to_string()
    } else {
        format!("{verb} {word}")
    }
}
