use std::fmt;

use serde::Serialize;

/// A grid location, zero-indexed from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum WallState {
    Present,
    Absent,
    Unknown,
}

impl WallState {
    pub fn is_open(self) -> bool {
        self == WallState::Absent
    }

    pub fn is_known(self) -> bool {
        self != WallState::Unknown
    }
}

/// Which flattened wall array a wall lives in.
///
/// Horizontal walls separate vertically stacked cells (row differs), vertical
/// walls separate side-by-side cells (column differs).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallAxis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WallSlot {
    pub axis: WallAxis,
    pub index: usize,
}
