//! Line-oriented text formats exchanged between architect, driver, and solver.
//!
//! Architect format carries full wall truth:
//! - Line 1: `size`
//! - Line 2: `start.row start.col`
//! - Line 3: `end.row end.col`
//! - Line 4: horizontal walls over `{0,1}`, `size*(size-1)` characters
//! - Line 5: vertical walls over `{0,1}`, same length
//!
//! Solver format shares the header, then carries the fog view:
//! - Lines 4-5: horizontal and vertical fog over `{0,1,?}`
//! - Line 6: `position.row position.col`
//! - Line 7: comma-separated `row col` move options (may be empty)
//!
//! Loading either format revalidates the maze the same way direct
//! construction does.

use crate::error::MazeError;
use crate::fog::FogOverlay;
use crate::grid::{Grid, MAX_SIZE};
use crate::maze::{Maze, check_endpoints};
use crate::types::{Cell, WallState};
use crate::walls::WallStore;

const ARCHITECT_LINES: usize = 5;
const SOLVER_MIN_LINES: usize = 6;
const SOLVER_MAX_LINES: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Alphabet {
    Truth,
    Fog,
}

impl Maze {
    pub fn to_architect_string(&self) -> String {
        let mut text = header(self);
        push_walls(&mut text, self.walls());
        text
    }

    /// Render the solver's view. The current cell is revealed first, so
    /// asking twice without moving still reports fresh walls around it.
    pub fn to_solver_string(&mut self) -> String {
        self.reveal(self.position());
        let mut text = header(self);
        push_walls(&mut text, self.fog().walls());
        text.push_str(&encode_cell(self.position()));
        text.push('\n');
        let options: Vec<String> = self.options().into_iter().map(encode_cell).collect();
        text.push_str(&options.join(","));
        text.push('\n');
        text
    }

    pub fn load_from_architect_string(text: &str) -> Result<Maze, MazeError> {
        let lines = split_lines(text, 0);
        if lines.len() != ARCHITECT_LINES {
            return Err(MazeError::parse(
                lines.len(),
                format!("expected {ARCHITECT_LINES} lines, found {}", lines.len()),
            ));
        }
        let (grid, start, end) = parse_header(&lines)?;
        let walls = parse_walls(grid, lines[3], lines[4], Alphabet::Truth)?;
        let maze = Maze::from_parts(grid, start, end, walls, FogOverlay::new(grid), start);
        maze.ensure_valid()?;
        Ok(maze)
    }

    /// Rebuild the solver's view. Unknown walls stay unknown and block movement.
    pub fn load_from_solver_string(text: &str) -> Result<Maze, MazeError> {
        let lines = split_lines(text, SOLVER_MAX_LINES);
        if !(SOLVER_MIN_LINES..=SOLVER_MAX_LINES).contains(&lines.len()) {
            return Err(MazeError::parse(
                lines.len(),
                format!(
                    "expected {SOLVER_MIN_LINES} or {SOLVER_MAX_LINES} lines, found {}",
                    lines.len()
                ),
            ));
        }
        let (grid, start, end) = parse_header(&lines)?;
        let fog = parse_walls(grid, lines[3], lines[4], Alphabet::Fog)?;
        let position = parse_cell(lines[5], 6)?;
        if !grid.in_bounds(position) {
            return Err(MazeError::parse(6, format!("position {position} is out of bounds")));
        }

        let maze =
            Maze::from_parts(grid, start, end, fog.clone(), FogOverlay::from_store(fog), position);

        let mut listed = parse_options(lines.get(6).copied().unwrap_or(""))?;
        let mut expected = maze.options();
        listed.sort();
        expected.sort();
        if listed != expected {
            return Err(MazeError::parse(7, "listed options disagree with the revealed walls"));
        }
        Ok(maze)
    }
}

/// Parse a solver's answer: a single `row col` line.
pub fn parse_decision(text: &str) -> Result<Cell, MazeError> {
    let lines = split_lines(text, 0);
    match lines.as_slice() {
        [line] => parse_cell(line, 1),
        _ => Err(MazeError::parse(lines.len(), "expected exactly one `row col` line")),
    }
}

pub fn encode_cell(cell: Cell) -> String {
    format!("{} {}", cell.row, cell.col)
}

fn header(maze: &Maze) -> String {
    format!(
        "{}\n{}\n{}\n",
        maze.size(),
        encode_cell(maze.start()),
        encode_cell(maze.end())
    )
}

fn push_walls(text: &mut String, walls: &WallStore) {
    text.extend(walls.horizontal().iter().map(|&state| encode_wall(state)));
    text.push('\n');
    text.extend(walls.vertical().iter().map(|&state| encode_wall(state)));
    text.push('\n');
}

fn encode_wall(state: WallState) -> char {
    match state {
        WallState::Present => '1',
        WallState::Absent => '0',
        WallState::Unknown => '?',
    }
}

fn decode_wall(ch: char, alphabet: Alphabet) -> Option<WallState> {
    match (ch, alphabet) {
        ('1', _) => Some(WallState::Present),
        ('0', _) => Some(WallState::Absent),
        ('?', Alphabet::Fog) => Some(WallState::Unknown),
        _ => None,
    }
}

/// Split into lines, dropping trailing blank lines beyond the first `keep`.
fn split_lines(text: &str, keep: usize) -> Vec<&str> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.len() > keep && lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    lines
}

fn parse_header(lines: &[&str]) -> Result<(Grid, Cell, Cell), MazeError> {
    let size: usize = lines[0]
        .trim()
        .parse()
        .map_err(|_| MazeError::parse(1, format!("size '{}' must be a number", lines[0])))?;
    if size > MAX_SIZE {
        let message = format!("size {size} exceeds the maximum of {MAX_SIZE}");
        return Err(MazeError::parse(1, message));
    }
    let start = parse_cell(lines[1], 2)?;
    let end = parse_cell(lines[2], 3)?;
    let grid = Grid::new(size);
    check_endpoints(grid, start, end)?;
    Ok((grid, start, end))
}

fn parse_cell(line: &str, line_number: usize) -> Result<Cell, MazeError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(MazeError::parse(line_number, format!("expected `row col`, found '{line}'")));
    };
    let parse = |raw: &str| {
        raw.parse::<i32>().map_err(|_| {
            MazeError::parse(line_number, format!("coordinate '{raw}' must be an integer"))
        })
    };
    Ok(Cell { row: parse(*row)?, col: parse(*col)? })
}

fn parse_options(line: &str) -> Result<Vec<Cell>, MazeError> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }
    line.split(',').map(|part| parse_cell(part, 7)).collect()
}

fn parse_walls(
    grid: Grid,
    horizontal: &str,
    vertical: &str,
    alphabet: Alphabet,
) -> Result<WallStore, MazeError> {
    let horizontal = parse_wall_line(grid, horizontal, 4, alphabet)?;
    let vertical = parse_wall_line(grid, vertical, 5, alphabet)?;
    Ok(WallStore::from_arrays(grid, horizontal, vertical))
}

fn parse_wall_line(
    grid: Grid,
    line: &str,
    line_number: usize,
    alphabet: Alphabet,
) -> Result<Vec<WallState>, MazeError> {
    let line = line.trim();
    let expected = grid.wall_count();
    if line.chars().count() != expected {
        return Err(MazeError::parse(
            line_number,
            format!("expected {expected} wall characters, found {}", line.chars().count()),
        ));
    }
    line.chars()
        .map(|ch| {
            decode_wall(ch, alphabet).ok_or_else(|| {
                MazeError::parse(line_number, format!("unexpected wall character '{ch}'"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests;
