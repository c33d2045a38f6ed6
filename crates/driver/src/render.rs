//! Plain-text maze pictures for verbose runs.

use maze_core::{Cell, Maze, WallState, WallStore};

/// Draw the maze with `S`, `E`, and `@` marking start, end, and the solver.
///
/// Each cell is two characters: its floor, then its right-hand wall. With
/// `fog` set, the solver's view is drawn and unknown walls show as `#`.
pub fn ascii(maze: &Maze, fog: bool) -> String {
    let size = maze.size();
    let walls = if fog { maze.fog().walls() } else { maze.walls() };

    let mut text = String::from("   ");
    let labels: Vec<String> = (0..size).map(|col| (col % 10).to_string()).collect();
    text.push_str(&labels.join(" "));
    text.push_str("\n   ");
    text.push_str(&"_".repeat(size * 2 - 1));

    for row in 0..size {
        text.push_str(&format!("\n{:>2}|", row % 100));
        for col in 0..size {
            let cell = Cell::new(row as i32, col as i32);
            let last_row = row == size - 1;
            text.push(marker(maze, cell).unwrap_or_else(|| {
                if last_row { '_' } else { floor_char(wall_below(walls, cell)) }
            }));
            if col == size - 1 {
                text.push('|');
            } else {
                let right = wall_right(walls, cell);
                text.push(if last_row && right == WallState::Absent {
                    '_'
                } else {
                    side_char(right)
                });
            }
        }
    }
    let (start, end) = (maze.start(), maze.end());
    text.push_str(&format!("\nstart:{start}\nend:{end}"));
    text
}

fn marker(maze: &Maze, cell: Cell) -> Option<char> {
    if cell == maze.position() {
        Some('@')
    } else if cell == maze.start() {
        Some('S')
    } else if cell == maze.end() {
        Some('E')
    } else {
        None
    }
}

fn wall_below(walls: &WallStore, cell: Cell) -> WallState {
    walls.get_wall(cell, Cell::new(cell.row + 1, cell.col)).unwrap_or(WallState::Present)
}

fn wall_right(walls: &WallStore, cell: Cell) -> WallState {
    walls.get_wall(cell, Cell::new(cell.row, cell.col + 1)).unwrap_or(WallState::Present)
}

fn floor_char(state: WallState) -> char {
    match state {
        WallState::Present => '_',
        WallState::Absent => ' ',
        WallState::Unknown => '#',
    }
}

fn side_char(state: WallState) -> char {
    match state {
        WallState::Present => '|',
        WallState::Absent => ' ',
        WallState::Unknown => '#',
    }
}
