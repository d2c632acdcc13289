//! Default gesture table mapping key chords to clipboard operations.

use crate::chord::KeyChord;
use crate::operation::OperationKind;

/// Category under which the bindings are listed in input-gesture dialogs.
pub const GESTURE_CATEGORY: &str = "Clipboard";

/// A single gesture entry: the chord that triggers an operation and the
/// description shown to the user when remapping gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureBinding {
    pub operation: OperationKind,
    pub chord: KeyChord,
    pub description: &'static str,
    pub category: &'static str,
}

/// The stock bindings registered when the plugin starts outside secure mode.
pub const DEFAULT_BINDINGS: &[GestureBinding] = &[
    GestureBinding {
        operation: OperationKind::Cut,
        chord: KeyChord::control('x'),
        description: "Cut selected item to clipboard, if appropriate.",
        category: GESTURE_CATEGORY,
    },
    GestureBinding {
        operation: OperationKind::Copy,
        chord: KeyChord::control('c'),
        description: "Copy selected item to clipboard, if appropriate.",
        category: GESTURE_CATEGORY,
    },
    GestureBinding {
        operation: OperationKind::CopyAsPath,
        chord: KeyChord::control_shift('c'),
        description: "Copy path of selected file to clipboard, if appropriate.",
        category: GESTURE_CATEGORY,
    },
    GestureBinding {
        operation: OperationKind::Paste,
        chord: KeyChord::control('v'),
        description: "Paste item from clipboard, if appropriate.",
        category: GESTURE_CATEGORY,
    },
    GestureBinding {
        operation: OperationKind::Undo,
        chord: KeyChord::control('z'),
        description: "Undo operation.",
        category: GESTURE_CATEGORY,
    },
    GestureBinding {
        operation: OperationKind::Redo,
        chord: KeyChord::control('y'),
        description: "Redo operation.",
        category: GESTURE_CATEGORY,
    },
];

/// Looks up which operation a chord triggers, if any.
pub fn operation_for(chord: &KeyChord) -> Option<OperationKind> {
    DEFAULT_BINDINGS
        .iter()
        .find(|binding| binding.chord == *chord)
        .map(|binding| binding.operation)
}

/// Looks up the stock chord for an operation.
pub fn chord_for(operation: OperationKind) -> Option<KeyChord> {
    DEFAULT_BINDINGS
        .iter()
        .find(|binding| binding.operation == operation)
        .map(|binding| binding.chord)
}
