//! Two flattened wall arrays over one grid, addressed by adjacent cell pairs.

use crate::error::MazeError;
use crate::grid::Grid;
use crate::types::{Cell, WallAxis, WallSlot, WallState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallStore {
    grid: Grid,
    horizontal: Vec<WallState>,
    vertical: Vec<WallState>,
}

impl WallStore {
    pub fn filled(grid: Grid, state: WallState) -> Self {
        let len = grid.wall_count();
        Self { grid, horizontal: vec![state; len], vertical: vec![state; len] }
    }

    /// Build a store from already-decoded arrays. Both must be `grid.wall_count()` long.
    pub(crate) fn from_arrays(
        grid: Grid,
        horizontal: Vec<WallState>,
        vertical: Vec<WallState>,
    ) -> Self {
        debug_assert_eq!(horizontal.len(), grid.wall_count());
        debug_assert_eq!(vertical.len(), grid.wall_count());
        Self { grid, horizontal, vertical }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn horizontal(&self) -> &[WallState] {
        &self.horizontal
    }

    pub fn vertical(&self) -> &[WallState] {
        &self.vertical
    }

    pub fn get_wall(&self, a: Cell, b: Cell) -> Result<WallState, MazeError> {
        let slot = self.grid.wall_index(a, b)?;
        Ok(self.slot(slot))
    }

    pub fn set_wall(&mut self, a: Cell, b: Cell, state: WallState) -> Result<(), MazeError> {
        let slot = self.grid.wall_index(a, b)?;
        self.set_slot(slot, state);
        Ok(())
    }

    pub fn slot(&self, slot: WallSlot) -> WallState {
        match slot.axis {
            WallAxis::Horizontal => self.horizontal[slot.index],
            WallAxis::Vertical => self.vertical[slot.index],
        }
    }

    pub(crate) fn set_slot(&mut self, slot: WallSlot, state: WallState) {
        match slot.axis {
            WallAxis::Horizontal => self.horizontal[slot.index] = state,
            WallAxis::Vertical => self.vertical[slot.index] = state,
        }
    }

    pub fn add_all_walls(&mut self) {
        self.fill(WallState::Present);
    }

    pub fn clear_all_walls(&mut self) {
        self.fill(WallState::Absent);
    }

    pub(crate) fn fill(&mut self, state: WallState) {
        self.horizontal.fill(state);
        self.vertical.fill(state);
    }

    /// Number of `Present` entries across both arrays.
    pub fn count_walls(&self) -> usize {
        self.horizontal
            .iter()
            .chain(self.vertical.iter())
            .filter(|&&state| state == WallState::Present)
            .count()
    }

    /// Neighbors reachable through an `Absent` wall. `Unknown` never counts as open.
    pub fn open_neighbors(&self, cell: Cell) -> Vec<Cell> {
        self.grid
            .adjacent_cells(cell)
            .filter(|&next| {
                self.grid.wall_index(cell, next).is_ok_and(|slot| self.slot(slot).is_open())
            })
            .collect()
    }
}
