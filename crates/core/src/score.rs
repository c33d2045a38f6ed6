use crate::maze::Maze;

/// Returned when start and end coincide and the run cannot be scored.
pub const DEGENERATE_SCORE: f64 = -1.0;

/// Steps taken relative to the maze's difficulty floor. Lower is better.
pub fn score(steps_taken: u64, l1_distance: u32, wall_count: usize) -> f64 {
    if l1_distance == 0 {
        return DEGENERATE_SCORE;
    }
    let floor = (l1_distance as usize).max(wall_count);
    steps_taken as f64 / floor as f64
}

pub fn maze_score(maze: &Maze, steps_taken: u64) -> f64 {
    score(steps_taken, maze.l1_distance(), maze.count_walls())
}
