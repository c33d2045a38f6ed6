//! Driver settings loaded from TOML and overridden from the command line.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use maze_core::MAX_SIZE;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SIZE: usize = 20;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_STATS_PATH: &str = "stats.txt";

/// A program to launch for one role, as an argument vector.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProgramSpec {
    pub args: Vec<String>,
}

impl ProgramSpec {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { args: args.into_iter().map(Into::into).collect() }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    pub size: usize,
    pub seed: u64,
    /// Defaults to `size³` when unset.
    pub step_limit: Option<u64>,
    pub verbose: bool,
    pub stats_path: PathBuf,
    pub report_path: Option<PathBuf>,
    pub architects: BTreeMap<String, ProgramSpec>,
    pub solvers: BTreeMap<String, ProgramSpec>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: DEFAULT_SEED,
            step_limit: None,
            verbose: false,
            stats_path: PathBuf::from(DEFAULT_STATS_PATH),
            report_path: None,
            architects: BTreeMap::from([("greek".to_string(), ProgramSpec::new(["architect"]))]),
            solvers: BTreeMap::from([("greek".to_string(), ProgramSpec::new(["solver"]))]),
        }
    }
}

impl DriverConfig {
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> io::Result<Self> {
        toml::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn step_limit(&self) -> u64 {
        self.step_limit.unwrap_or_else(|| (self.size as u64).saturating_pow(3))
    }

    pub fn validate(&self) -> Result<()> {
        if self.size < 2 {
            bail!("size must be at least 2, got {}", self.size);
        }
        if self.size > MAX_SIZE {
            bail!("size must be at most {MAX_SIZE}, got {}", self.size);
        }
        if self.step_limit() == 0 {
            bail!("step_limit must be positive");
        }
        if self.architects.is_empty() {
            bail!("at least one architect must be configured");
        }
        if self.solvers.is_empty() {
            bail!("at least one solver must be configured");
        }
        for (role, programs) in [("architect", &self.architects), ("solver", &self.solvers)] {
            for (name, spec) in programs {
                if spec.args.is_empty() {
                    bail!("{role} '{name}' has an empty argument list");
                }
            }
        }
        Ok(())
    }
}
