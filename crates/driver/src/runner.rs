//! The driver's match loop: load an architect's maze, then step a solver through it.
//! This module exists so one misbehaving pairing cannot take down a batch.
//! It does not own process launching or score-file formats.

use anyhow::{Context, Result};
use maze_core::{Cell, Maze, maze_score, parse_decision};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::DriverConfig;
use crate::render;
use crate::roles::{Architect, Solver};
use crate::stats::StatsWriter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSettings {
    pub size: usize,
    pub seed: u64,
    pub step_limit: u64,
    pub verbose: bool,
}

impl From<&DriverConfig> for MatchSettings {
    fn from(config: &DriverConfig) -> Self {
        Self {
            size: config.size,
            seed: config.seed,
            step_limit: config.step_limit(),
            verbose: config.verbose,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchReport {
    pub architect: String,
    pub solver: String,
    pub size: usize,
    pub seed: u64,
    pub steps: u64,
    pub solved: bool,
    pub cheats: u64,
    pub score: f64,
}

impl MatchReport {
    pub fn inverse_score(&self) -> f64 {
        1.0 / self.score
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepVerdict {
    Moved(Cell),
    /// The answer was unparseable or not a listed option; nothing changed.
    Cheated,
}

/// Ask the architect for a maze and accept it only if it loads and connects.
pub fn load_architect_maze(architect: &mut dyn Architect, settings: &MatchSettings) -> Result<Maze> {
    let text = architect.design(settings.size, settings.seed).context("architect failed")?;
    let maze = Maze::load_from_architect_string(&text).context("architect produced an unusable maze")?;
    if maze.size() != settings.size {
        warn!(requested = settings.size, produced = maze.size(), "architect ignored requested size");
    }
    Ok(maze)
}

/// Apply one solver answer. Illegal or malformed answers leave the maze untouched.
pub fn apply_decision(maze: &mut Maze, answer: &str) -> StepVerdict {
    let decision = match parse_decision(answer) {
        Ok(cell) => cell,
        Err(e) => {
            warn!(position = %maze.position(), error = %e, "solver answer could not be parsed");
            return StepVerdict::Cheated;
        }
    };
    match maze.move_to(decision) {
        Ok(()) => StepVerdict::Moved(decision),
        Err(e) => {
            warn!(error = %e, "solver tried to cheat");
            StepVerdict::Cheated
        }
    }
}

pub fn run_match(
    architect_name: &str,
    architect: &mut dyn Architect,
    solver_name: &str,
    solver: &mut dyn Solver,
    settings: &MatchSettings,
) -> Result<MatchReport> {
    info!(architect = architect_name, solver = solver_name, "beginning match");
    let mut maze = load_architect_maze(architect, settings)?;
    if settings.verbose {
        println!("{}", render::ascii(&maze, false));
    }

    let mut steps = 0_u64;
    let mut cheats = 0_u64;
    while steps < settings.step_limit && !maze.solved() {
        if steps % maze.size() as u64 == 0 {
            debug!(steps, position = %maze.position(), "progress");
        }
        let request = maze.to_solver_string();
        let answer = solver.decide(&request).context("solver failed")?;
        if apply_decision(&mut maze, &answer) == StepVerdict::Cheated {
            cheats += 1;
        }
        steps += 1;
    }

    let solved = maze.solved();
    if solved {
        info!(steps, "solver finished");
    } else {
        info!(steps, "solver could not finish the maze");
    }
    if settings.verbose {
        println!("{}", render::ascii(&maze, true));
    }

    Ok(MatchReport {
        architect: architect_name.to_string(),
        solver: solver_name.to_string(),
        size: maze.size(),
        seed: settings.seed,
        steps,
        solved,
        cheats,
        score: maze_score(&maze, steps),
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchFailure {
    pub architect: String,
    pub solver: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchSummary {
    pub reports: Vec<MatchReport>,
    pub failures: Vec<MatchFailure>,
}

/// Run every architect against every solver. A failed pairing is logged and
/// recorded; only stats-file I/O errors stop the batch.
pub fn run_batch(
    settings: &MatchSettings,
    architects: &mut [(String, Box<dyn Architect>)],
    solvers: &mut [(String, Box<dyn Solver>)],
    stats: &mut StatsWriter,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    for (architect_name, architect) in architects.iter_mut() {
        for (solver_name, solver) in solvers.iter_mut() {
            match run_match(architect_name, architect.as_mut(), solver_name, solver.as_mut(), settings)
            {
                Ok(report) => {
                    info!(
                        architect = %report.architect,
                        solver = %report.solver,
                        score = report.score,
                        "match scored"
                    );
                    stats.record(&report).context("failed to write stats")?;
                    summary.reports.push(report);
                }
                Err(e) => {
                    let message = format!("{e:#}");
                    error!(
                        architect = %architect_name,
                        solver = %solver_name,
                        error = %message,
                        "problem with match"
                    );
                    summary.failures.push(MatchFailure {
                        architect: architect_name.clone(),
                        solver: solver_name.clone(),
                        message,
                    });
                }
            }
        }
    }
    Ok(summary)
}
