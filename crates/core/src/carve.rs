//! Randomized spanning-tree carving for architects.
//! This module exists so maze generation is reproducible from an explicit RNG handle.
//! It does not own serialization or solver-side state.

use rand_chacha::rand_core::Rng;

use crate::error::{ConstructionFault, MazeError};
use crate::grid::{Grid, MAX_SIZE};
use crate::maze::Maze;
use crate::types::Cell;

/// Uniform index in `0..len`. `len` must be non-zero.
pub fn random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}

pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, grid: Grid) -> Cell {
    let row = random_index(rng, grid.size()) as i32;
    let col = random_index(rng, grid.size()) as i32;
    Cell { row, col }
}

/// Draw a start cell, then redraw the end until it differs from the start.
pub fn random_endpoints<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<(Cell, Cell), MazeError> {
    match size {
        0 => return Err(MazeError::Construction(ConstructionFault::ZeroSize)),
        1 => return Err(MazeError::Construction(ConstructionFault::StartEqualsEnd)),
        size if size > MAX_SIZE => {
            return Err(MazeError::Construction(ConstructionFault::TooLarge { size }));
        }
        _ => {}
    }
    let grid = Grid::new(size);
    let start = random_cell(rng, grid);
    let mut end = random_cell(rng, grid);
    while end == start {
        end = random_cell(rng, grid);
    }
    Ok((start, end))
}

/// Wall in the whole maze, then knock walls down along a random spanning tree rooted at start.
///
/// Growth continues from the most recently carved cell while it has unvisited
/// neighbors; otherwise an arbitrary remaining branch point is removed and
/// becomes the new growth cell. Every cell ends up visited, so the result is
/// always valid; the final connectivity check is kept as a safety net.
pub fn carve<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) -> Result<(), MazeError> {
    let grid = maze.grid();
    maze.add_all_walls();

    let start = maze.start();
    let mut visited = vec![false; grid.cell_count()];
    visited[grid.cell_index(start)] = true;
    let mut branches = vec![start];
    let mut current = start;

    while !branches.is_empty() {
        let choices: Vec<Cell> =
            grid.adjacent_cells(current).filter(|next| !visited[grid.cell_index(*next)]).collect();
        if choices.is_empty() {
            current = branches.swap_remove(random_index(rng, branches.len()));
            continue;
        }
        let next = choices[random_index(rng, choices.len())];
        maze.del_wall(current, next)?;
        visited[grid.cell_index(next)] = true;
        branches.push(next);
        current = next;
    }

    maze.ensure_valid()
}

/// Full architect pipeline: pick endpoints, then carve.
pub fn design_maze<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<Maze, MazeError> {
    let (start, end) = random_endpoints(rng, size)?;
    let mut maze = Maze::new(size, start, end)?;
    carve(&mut maze, rng)?;
    Ok(maze)
}
