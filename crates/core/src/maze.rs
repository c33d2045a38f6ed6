//! The maze entity: ground-truth walls, the solver's fog, and the solver position.

use crate::connectivity::is_connected;
use crate::error::{ConstructionFault, MazeError};
use crate::fog::FogOverlay;
use crate::grid::{Grid, MAX_SIZE};
use crate::types::{Cell, WallState};
use crate::walls::WallStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Cell,
    end: Cell,
    walls: WallStore,
    fog: FogOverlay,
    position: Cell,
}

impl Maze {
    /// Create a blank maze with every wall `Absent` and the solver standing on `start`.
    pub fn new(size: usize, start: Cell, end: Cell) -> Result<Self, MazeError> {
        let grid = Grid::new(size);
        check_endpoints(grid, start, end)?;
        Ok(Self::assemble(grid, start, end, WallStore::filled(grid, WallState::Absent), start))
    }

    /// Wrap already-decoded walls. Endpoints must have passed `check_endpoints`.
    pub(crate) fn from_parts(
        grid: Grid,
        start: Cell,
        end: Cell,
        walls: WallStore,
        fog: FogOverlay,
        position: Cell,
    ) -> Self {
        let mut maze = Self { grid, start, end, walls, fog, position };
        maze.reveal(position);
        maze
    }

    fn assemble(grid: Grid, start: Cell, end: Cell, walls: WallStore, position: Cell) -> Self {
        Self::from_parts(grid, start, end, walls, FogOverlay::new(grid), position)
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn walls(&self) -> &WallStore {
        &self.walls
    }

    pub fn fog(&self) -> &FogOverlay {
        &self.fog
    }

    pub fn is_valid(&self) -> bool {
        is_connected(&self.walls, self.start, self.end)
    }

    pub fn ensure_valid(&self) -> Result<(), MazeError> {
        if self.is_valid() { Ok(()) } else { Err(MazeError::InvalidMaze) }
    }

    pub fn adjacent_cells(&self, cell: Cell) -> Vec<Cell> {
        self.grid.adjacent_cells(cell).collect()
    }

    /// Legal moves out of `cell` according to the true walls.
    pub fn open_neighbors(&self, cell: Cell) -> Vec<Cell> {
        self.walls.open_neighbors(cell)
    }

    /// Legal moves out of the current position.
    pub fn options(&self) -> Vec<Cell> {
        self.open_neighbors(self.position)
    }

    pub fn get_wall(&self, a: Cell, b: Cell) -> Result<WallState, MazeError> {
        self.walls.get_wall(a, b)
    }

    pub fn set_wall(&mut self, a: Cell, b: Cell, state: WallState) -> Result<(), MazeError> {
        self.walls.set_wall(a, b, state)?;
        self.reveal(self.position);
        Ok(())
    }

    pub fn add_wall(&mut self, a: Cell, b: Cell) -> Result<(), MazeError> {
        self.set_wall(a, b, WallState::Present)
    }

    pub fn del_wall(&mut self, a: Cell, b: Cell) -> Result<(), MazeError> {
        self.set_wall(a, b, WallState::Absent)
    }

    pub fn add_all_walls(&mut self) {
        self.walls.add_all_walls();
        self.reveal(self.position);
    }

    pub fn clear_all_walls(&mut self) {
        self.walls.clear_all_walls();
        self.reveal(self.position);
    }

    pub fn count_walls(&self) -> usize {
        self.walls.count_walls()
    }

    pub fn l1_distance(&self) -> u32 {
        self.start.manhattan(self.end)
    }

    pub fn reveal(&mut self, cell: Cell) {
        self.fog.reveal(&self.walls, cell);
    }

    pub fn move_to(&mut self, destination: Cell) -> Result<(), MazeError> {
        if !self.options().contains(&destination) {
            return Err(MazeError::IllegalMove { from: self.position, to: destination });
        }
        self.position = destination;
        self.reveal(destination);
        Ok(())
    }

    pub fn solved(&self) -> bool {
        self.position == self.end
    }

    /// Put the fog back over every wall and send the solver back to `start`.
    pub fn reset(&mut self) {
        self.fog.reset();
        self.position = self.start;
        self.reveal(self.start);
    }
}

pub(crate) fn check_endpoints(grid: Grid, start: Cell, end: Cell) -> Result<(), MazeError> {
    if grid.size() == 0 {
        return Err(MazeError::Construction(ConstructionFault::ZeroSize));
    }
    if grid.size() > MAX_SIZE {
        return Err(MazeError::Construction(ConstructionFault::TooLarge { size: grid.size() }));
    }
    if start == end {
        return Err(MazeError::Construction(ConstructionFault::StartEqualsEnd));
    }
    if !grid.in_bounds(start) {
        return Err(MazeError::Construction(ConstructionFault::StartOutOfBounds));
    }
    if !grid.in_bounds(end) {
        return Err(MazeError::Construction(ConstructionFault::EndOutOfBounds));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
