//! Tetrion headers, tetromino shapes and board snapshots.

use std::fmt;

use crate::error::InvalidDiscriminant;
use crate::grid::GridPoint;

/// Per-tetrion starting conditions. Position in the owning sequence is
/// the tetrion index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TetrionHeader {
    /// Seed of the piece randomizer.
    pub seed: u64,
    /// Level the tetrion starts at.
    pub starting_level: u32,
}

/// The seven tetromino shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TetrominoType {
    /// Straight piece.
    I = 0,
    /// J piece.
    J = 1,
    /// L piece.
    L = 2,
    /// Square piece.
    O = 3,
    /// S piece.
    S = 4,
    /// T piece.
    T = 5,
    /// Z piece.
    Z = 6,
}

impl TetrominoType {
    /// Every enumerator, in discriminant order.
    pub const ALL: [TetrominoType; 7] = [
        Self::I,
        Self::J,
        Self::L,
        Self::O,
        Self::S,
        Self::T,
        Self::Z,
    ];
}

impl TryFrom<u8> for TetrominoType {
    type Error = InvalidDiscriminant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(InvalidDiscriminant {
                what: "tetromino type",
                value,
            })
    }
}

impl fmt::Display for TetrominoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One locked cell of a placed tetromino.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Mino {
    /// Cell the mino occupies.
    pub position: GridPoint,
    /// Shape of the piece the mino came from (determines its colour).
    pub tetromino_type: TetrominoType,
}

impl Mino {
    /// Construct a mino.
    pub const fn new(position: GridPoint, tetromino_type: TetrominoType) -> Self {
        Self {
            position,
            tetromino_type,
        }
    }
}

/// Point-in-time capture of one tetrion's board.
///
/// # Examples
///
/// ```
/// use tetrec_core::{GridPoint, Mino, TetrionSnapshot, TetrominoType};
///
/// let snapshot = TetrionSnapshot {
///     level: 3,
///     lines_cleared: 0,
///     mino_stack: vec![Mino::new(GridPoint::new(4, 0), TetrominoType::T)],
///     score: 0,
///     simulation_step_index: 100,
///     tetrion_index: 0,
/// };
/// assert_eq!(snapshot.mino_stack.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TetrionSnapshot {
    /// Current level.
    pub level: u32,
    /// Total lines cleared so far.
    pub lines_cleared: u32,
    /// Locked minos in stack order.
    pub mino_stack: Vec<Mino>,
    /// Current score.
    pub score: u64,
    /// Tick the snapshot was taken at.
    pub simulation_step_index: u64,
    /// Index into the recording's tetrion headers.
    pub tetrion_index: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_match_all_order() {
        for (i, ty) in TetrominoType::ALL.iter().enumerate() {
            assert_eq!(TetrominoType::try_from(i as u8), Ok(*ty));
        }
        assert!(TetrominoType::try_from(7).is_err());
    }

    #[test]
    fn display_is_single_letter() {
        for ty in TetrominoType::ALL {
            assert_eq!(ty.to_string().len(), 1);
        }
        assert_eq!(TetrominoType::O.to_string(), "O");
    }
}
