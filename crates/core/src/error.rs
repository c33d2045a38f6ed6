//! Error kinds raised by maze construction, wall access, movement, and text loading.

use std::error::Error;
use std::fmt;

use crate::grid::MAX_SIZE;
use crate::types::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstructionFault {
    ZeroSize,
    TooLarge { size: usize },
    StartEqualsEnd,
    StartOutOfBounds,
    EndOutOfBounds,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// The maze could not be created from the given size and endpoints.
    Construction(ConstructionFault),
    /// A wall lookup named two cells that are not one step apart, or a cell
    /// outside the grid.
    Adjacency { from: Cell, to: Cell },
    /// No open path connects start to end.
    InvalidMaze,
    /// The destination is not among the legal moves from the current position.
    IllegalMove { from: Cell, to: Cell },
    /// Textual input did not follow the wire grammar. `line` is 1-indexed.
    ProtocolParse { line: usize, message: String },
}

impl MazeError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ProtocolParse { line, message: message.into() }
    }
}

impl fmt::Display for ConstructionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "maze size must be positive"),
            Self::TooLarge { size } => {
                write!(f, "maze size {size} exceeds the maximum of {MAX_SIZE}")
            }
            Self::StartEqualsEnd => write!(f, "maze start and end are the same cell"),
            Self::StartOutOfBounds => write!(f, "maze start is out of bounds"),
            Self::EndOutOfBounds => write!(f, "maze end is out of bounds"),
        }
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construction(fault) => write!(f, "cannot construct maze: {fault}"),
            Self::Adjacency { from, to } => {
                write!(f, "cannot address wall between non-adjacent or outside cells {from}=>{to}")
            }
            Self::InvalidMaze => write!(f, "maze has no open path from start to end"),
            Self::IllegalMove { from, to } => write!(f, "illegal move {from}=>{to}"),
            Self::ProtocolParse { line, message } => {
                write!(f, "malformed maze text at line {line}: {message}")
            }
        }
    }
}

impl Error for MazeError {}
