//! Shared plumbing for the reference role programs.
//!
//! Role programs talk the wire protocol on stdout, so logs always go to stderr.

use std::io;

use anyhow::{Context, Result, bail};
use maze_core::{
    Cell, Maze, MazeError, connectivity::reachable_count, design_maze, maze_score,
    solver::random_walk_decision,
};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use xxhash_rust::xxh3::xxh3_64;

/// Seed used when an architect request omits one.
pub const DEFAULT_ARCHITECT_SEED: u64 = 1_234_567;

pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

/// Parse `<size> [seed]` from the first line of an architect request.
pub fn parse_architect_request(input: &str) -> Result<(usize, u64)> {
    let line = input.lines().next().unwrap_or("");
    let parts: Vec<&str> = line.split_whitespace().collect();
    let (size, seed) = match parts.as_slice() {
        [size] => (*size, None),
        [size, seed] => (*size, Some(*seed)),
        _ => bail!("expected `<size> <seed>`, found '{line}'"),
    };
    let size = size.parse().with_context(|| format!("size '{size}' must be a number"))?;
    let seed = match seed {
        Some(raw) => raw.parse().with_context(|| format!("seed '{raw}' must be a number"))?,
        None => DEFAULT_ARCHITECT_SEED,
    };
    Ok((size, seed))
}

pub fn architect_response(input: &str) -> Result<String> {
    let (size, seed) = parse_architect_request(input)?;
    let maze = design_maze(&mut ChaCha8Rng::seed_from_u64(seed), size)?;
    Ok(maze.to_architect_string())
}

/// Mix the caller's seed with the request text so every step draws fresh
/// randomness while whole runs stay reproducible.
pub fn solver_seed(base_seed: u64, request: &str) -> u64 {
    base_seed ^ xxh3_64(request.as_bytes())
}

pub fn solver_response(base_seed: u64, request: &str) -> Result<String, MazeError> {
    let mut rng = ChaCha8Rng::seed_from_u64(solver_seed(base_seed, request));
    let cell = random_walk_decision(&mut rng, request)?;
    Ok(format!("{} {}\n", cell.row, cell.col))
}

/// What `maze-check` reports about a loaded maze.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MazeSummary {
    pub size: usize,
    pub start: Cell,
    pub end: Cell,
    pub walls: usize,
    pub l1_distance: u32,
    pub reachable_cells: usize,
    pub total_cells: usize,
    /// Score a perfect solver walking straight to the end would earn.
    pub best_case_score: f64,
}

impl MazeSummary {
    pub fn of(maze: &Maze) -> Self {
        Self {
            size: maze.size(),
            start: maze.start(),
            end: maze.end(),
            walls: maze.count_walls(),
            l1_distance: maze.l1_distance(),
            reachable_cells: reachable_count(maze.walls(), maze.start()),
            total_cells: maze.grid().cell_count(),
            best_case_score: maze_score(maze, u64::from(maze.l1_distance())),
        }
    }
}
