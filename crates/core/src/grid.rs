//! Coordinate math for a square grid and the flattened wall layout.
//! This module exists so every wall array agrees on one indexing scheme.
//! It does not own any wall state.

use crate::error::MazeError;
use crate::types::{Cell, WallAxis, WallSlot};

/// Largest side length any maze may have. Keeps every index, wall count and
/// `size³` step budget inside native integer range.
pub const MAX_SIZE: usize = 4096;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(self) -> usize {
        self.size
    }

    /// Length of each of the two flattened wall arrays.
    pub fn wall_count(self) -> usize {
        self.size.saturating_mul(self.size.saturating_sub(1))
    }

    pub fn cell_count(self) -> usize {
        self.size.saturating_mul(self.size)
    }

    pub fn in_bounds(self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.size
            && (cell.col as usize) < self.size
    }

    /// Row-major index of an in-bounds cell.
    pub fn cell_index(self, cell: Cell) -> usize {
        (cell.row as usize) * self.size + (cell.col as usize)
    }

    /// In-bounds 4-neighbors, always in the order down, up, right, left.
    pub fn adjacent_cells(self, cell: Cell) -> impl Iterator<Item = Cell> {
        neighbors(cell).into_iter().filter(move |&next| self.in_bounds(next))
    }

    pub fn wall_index(self, a: Cell, b: Cell) -> Result<WallSlot, MazeError> {
        if !self.in_bounds(a) || !self.in_bounds(b) || a.manhattan(b) != 1 {
            return Err(MazeError::Adjacency { from: a, to: b });
        }
        let min_row = a.row.min(b.row) as usize;
        let min_col = a.col.min(b.col) as usize;
        if a.row != b.row {
            Ok(WallSlot { axis: WallAxis::Horizontal, index: min_row * self.size + min_col })
        } else {
            Ok(WallSlot { axis: WallAxis::Vertical, index: min_row * (self.size - 1) + min_col })
        }
    }

    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let size = self.size as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell { row, col }))
    }
}

fn neighbors(cell: Cell) -> [Cell; 4] {
    [
        Cell { row: cell.row + 1, col: cell.col },
        Cell { row: cell.row - 1, col: cell.col },
        Cell { row: cell.row, col: cell.col + 1 },
        Cell { row: cell.row, col: cell.col - 1 },
    ]
}
