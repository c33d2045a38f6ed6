//! Solver-facing knowledge of the walls, revealed cell by cell.
//! This module exists to keep what a solver may see separate from ground truth.
//! It does not decide which moves are legal.

use crate::grid::Grid;
use crate::types::{Cell, WallState};
use crate::walls::WallStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FogOverlay {
    known: WallStore,
}

impl FogOverlay {
    pub fn new(grid: Grid) -> Self {
        Self { known: WallStore::filled(grid, WallState::Unknown) }
    }

    pub(crate) fn from_store(known: WallStore) -> Self {
        Self { known }
    }

    /// Copy the true state of every wall touching `cell` into the overlay.
    ///
    /// Truth entries that are themselves `Unknown` are skipped, so a revealed
    /// wall never falls back to `Unknown`.
    pub fn reveal(&mut self, truth: &WallStore, cell: Cell) {
        let grid = self.known.grid();
        if !grid.in_bounds(cell) {
            return;
        }
        for next in grid.adjacent_cells(cell) {
            let Ok(slot) = grid.wall_index(cell, next) else {
                continue;
            };
            let state = truth.slot(slot);
            if state.is_known() {
                self.known.set_slot(slot, state);
            }
        }
    }

    pub fn reset(&mut self) {
        self.known.fill(WallState::Unknown);
    }

    pub fn walls(&self) -> &WallStore {
        &self.known
    }

    pub fn known_count(&self) -> usize {
        self.known
            .horizontal()
            .iter()
            .chain(self.known.vertical())
            .filter(|state| state.is_known())
            .count()
    }
}
