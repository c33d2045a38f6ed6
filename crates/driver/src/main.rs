use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use maze_driver::{
    Architect, DriverConfig, MatchSettings, ProgramRole, Solver, StatsWriter, run_batch,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Pit maze architects against maze solvers", long_about = None)]
struct Args {
    /// TOML file naming the architect and solver programs
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    size: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    /// Maximum solver requests per match (defaults to size cubed)
    #[arg(long)]
    step_limit: Option<u64>,
    /// Print the maze before and after each match
    #[arg(short, long)]
    verbose: bool,
    /// Where to write score lines
    #[arg(long)]
    stats: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => DriverConfig::load(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?,
        None => DriverConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.step_limit.is_some() {
        config.step_limit = args.step_limit;
    }
    if let Some(stats) = args.stats {
        config.stats_path = stats;
    }
    config.verbose |= args.verbose;
    config.validate()?;

    let mut architects: Vec<(String, Box<dyn Architect>)> = config
        .architects
        .iter()
        .map(|(name, spec)| {
            (name.clone(), Box::new(ProgramRole::new(spec.clone())) as Box<dyn Architect>)
        })
        .collect();
    let mut solvers: Vec<(String, Box<dyn Solver>)> = config
        .solvers
        .iter()
        .map(|(name, spec)| (name.clone(), Box::new(ProgramRole::new(spec.clone())) as Box<dyn Solver>))
        .collect();

    let mut stats = StatsWriter::create(&config.stats_path, config.report_path.as_deref())
        .with_context(|| format!("Failed to create stats file: {}", config.stats_path.display()))?;
    let summary =
        run_batch(&MatchSettings::from(&config), &mut architects, &mut solvers, &mut stats)?;

    for report in &summary.reports {
        println!(
            "{} vs {}: {} steps, solved={}, cheats={}, score={:.6}",
            report.architect, report.solver, report.steps, report.solved, report.cheats, report.score
        );
    }
    for failure in &summary.failures {
        println!("Problem with match {} vs {}: {}", failure.architect, failure.solver, failure.message);
    }
    if summary.reports.is_empty() {
        bail!("no match finished");
    }
    Ok(())
}
