//! Input events and the per-tick record log.

use std::fmt;

use crate::error::InvalidDiscriminant;

/// A discrete input applied to one tetrion.
///
/// Every action has a pressed and a released enumerator. The `u8`
/// discriminants are the on-disk encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum InputEvent {
    /// Rotate counter-clockwise, key down.
    RotateLeftPressed = 0,
    /// Rotate clockwise, key down.
    RotateRightPressed = 1,
    /// Shift left, key down.
    MoveLeftPressed = 2,
    /// Shift right, key down.
    MoveRightPressed = 3,
    /// Soft drop, key down.
    MoveDownPressed = 4,
    /// Hard drop, key down.
    DropPressed = 5,
    /// Swap with the hold piece, key down.
    HoldPressed = 6,
    /// Rotate counter-clockwise, key up.
    RotateLeftReleased = 7,
    /// Rotate clockwise, key up.
    RotateRightReleased = 8,
    /// Shift left, key up.
    MoveLeftReleased = 9,
    /// Shift right, key up.
    MoveRightReleased = 10,
    /// Soft drop, key up.
    MoveDownReleased = 11,
    /// Hard drop, key up.
    DropReleased = 12,
    /// Swap with the hold piece, key up.
    HoldReleased = 13,
}

impl InputEvent {
    /// Every enumerator, in discriminant order.
    pub const ALL: [InputEvent; 14] = [
        Self::RotateLeftPressed,
        Self::RotateRightPressed,
        Self::MoveLeftPressed,
        Self::MoveRightPressed,
        Self::MoveDownPressed,
        Self::DropPressed,
        Self::HoldPressed,
        Self::RotateLeftReleased,
        Self::RotateRightReleased,
        Self::MoveLeftReleased,
        Self::MoveRightReleased,
        Self::MoveDownReleased,
        Self::DropReleased,
        Self::HoldReleased,
    ];
}

impl TryFrom<u8> for InputEvent {
    type Error = InvalidDiscriminant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(InvalidDiscriminant {
                what: "input event",
                value,
            })
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One input event at a simulation tick on one tetrion.
///
/// # Examples
///
/// ```
/// use tetrec_core::{InputEvent, Record};
///
/// let record = Record {
///     event: InputEvent::DropPressed,
///     simulation_step_index: 100,
///     tetrion_index: 0,
/// };
/// assert_eq!(record.event as u8, 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record {
    /// The input that occurred.
    pub event: InputEvent,
    /// Tick at which the input was applied.
    pub simulation_step_index: u64,
    /// Index into the recording's tetrion headers.
    pub tetrion_index: u32,
}
