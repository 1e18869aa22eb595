//! Error types for the typed recording model.

use std::error::Error;
use std::fmt;

/// A raw wire discriminant does not name any enumerator of a closed enum.
///
/// Produced by the `TryFrom<u8>` impls of [`InputEvent`](crate::InputEvent)
/// and [`TetrominoType`](crate::TetrominoType). The parser turns this into
/// a data error, so out-of-range values never reach the converters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidDiscriminant {
    /// Name of the enum being decoded.
    pub what: &'static str,
    /// The rejected raw value.
    pub value: u8,
}

impl fmt::Display for InvalidDiscriminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} discriminant {}", self.what, self.value)
    }
}

impl Error for InvalidDiscriminant {}
