//! Key interception primitives for clipspeak.
//!
//! Provides the chord model, the default gesture table, and key forwarding
//! back into the focused application once a chord has been examined.
//!
//! # Example
//!
//! ```
//! use clipspeak_input::{operation_for, KeyChord, OperationKind};
//!
//! let chord: KeyChord = "control+c".parse().unwrap();
//! assert_eq!(operation_for(&chord), Some(OperationKind::Copy));
//! ```

mod bindings;
mod chord;
mod error;
mod forwarder;
mod operation;

pub use bindings::{
    chord_for, operation_for, GestureBinding, DEFAULT_BINDINGS, GESTURE_CATEGORY,
};
pub use chord::KeyChord;
pub use error::InputError;
pub use forwarder::{
    InMemoryForwarder, KeyForwarder, KeyForwarderRef, NullForwarder, SystemForwarder,
    MODIFIER_SETTLE_MS,
};
pub use operation::OperationKind;
