//! Play-field dimensions and grid coordinates.

/// Width of the play field, in cells.
pub const GRID_WIDTH: u32 = 10;

/// Height of the play field, in cells.
pub const GRID_HEIGHT: u32 = 20;

/// The play-field size snapshots and minos are relative to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridProperties {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl GridProperties {
    /// The fixed grid every recording is played on.
    pub const STANDARD: GridProperties = GridProperties {
        width: GRID_WIDTH,
        height: GRID_HEIGHT,
    };
}

impl Default for GridProperties {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A cell position on the play grid.
///
/// Stored wide; the on-disk and dynamic representations narrow each
/// coordinate to `u8`, which is lossless for every point inside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPoint {
    /// Column, 0 is the left edge.
    pub x: u32,
    /// Row, 0 is the top edge.
    pub y: u32,
}

impl GridPoint {
    /// Construct a point.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Whether the point lies within [`GridProperties::STANDARD`].
    pub fn is_inside_grid(&self) -> bool {
        self.x < GRID_WIDTH && self.y < GRID_HEIGHT
    }
}
