//! Reference solver: a blind random walk over the listed options.

use rand_chacha::rand_core::Rng;

use crate::carve::random_index;
use crate::error::MazeError;
use crate::maze::Maze;
use crate::types::Cell;

pub fn random_choice<R: Rng + ?Sized>(rng: &mut R, options: &[Cell]) -> Option<Cell> {
    if options.is_empty() {
        return None;
    }
    Some(options[random_index(rng, options.len())])
}

/// Decide the next cell from a solver-format request.
///
/// With no options listed the solver stays put, which the driver rejects as
/// an illegal move.
pub fn random_walk_decision<R: Rng + ?Sized>(rng: &mut R, request: &str) -> Result<Cell, MazeError> {
    let view = Maze::load_from_solver_string(request)?;
    Ok(random_choice(rng, &view.options()).unwrap_or(view.position()))
}
