pub mod carve;
pub mod connectivity;
pub mod error;
pub mod fog;
pub mod grid;
pub mod maze;
pub mod protocol;
pub mod score;
pub mod solver;
pub mod types;
pub mod walls;

pub use carve::{carve, design_maze, random_endpoints};
pub use connectivity::is_connected;
pub use error::{ConstructionFault, MazeError};
pub use fog::FogOverlay;
pub use grid::{Grid, MAX_SIZE};
pub use maze::Maze;
pub use protocol::{encode_cell, parse_decision};
pub use score::{DEGENERATE_SCORE, maze_score, score};
pub use types::*;
pub use walls::WallStore;
