//! Breadth-first reachability over open walls.
//! This module defines what makes a maze valid.

use std::collections::VecDeque;

use crate::types::Cell;
use crate::walls::WallStore;

/// True when `end` can be reached from `start` through `Absent` walls only.
pub fn is_connected(walls: &WallStore, start: Cell, end: Cell) -> bool {
    let grid = walls.grid();
    if !grid.in_bounds(start) || !grid.in_bounds(end) {
        return false;
    }

    let mut visited = vec![false; grid.cell_count()];
    let mut queue = VecDeque::new();
    visited[grid.cell_index(start)] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            return true;
        }
        for next in walls.open_neighbors(current) {
            let idx = grid.cell_index(next);
            if !visited[idx] {
                visited[idx] = true;
                queue.push_back(next);
            }
        }
    }
    false
}

/// Number of cells reachable from `start`, including `start` itself.
pub fn reachable_count(walls: &WallStore, start: Cell) -> usize {
    let grid = walls.grid();
    if !grid.in_bounds(start) {
        return 0;
    }

    let mut visited = vec![false; grid.cell_count()];
    let mut queue = VecDeque::from([start]);
    visited[grid.cell_index(start)] = true;
    let mut count = 0;

    while let Some(current) = queue.pop_front() {
        count += 1;
        for next in walls.open_neighbors(current) {
            let idx = grid.cell_index(next);
            if !visited[idx] {
                visited[idx] = true;
                queue.push_back(next);
            }
        }
    }
    count
}
