pub mod config;
pub mod render;
pub mod roles;
pub mod runner;
pub mod stats;

pub use config::{DriverConfig, ProgramSpec};
pub use roles::{Architect, ProgramRole, Solver};
pub use runner::{BatchSummary, MatchReport, MatchSettings, run_batch, run_match};
pub use stats::StatsWriter;
