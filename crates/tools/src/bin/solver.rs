use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use maze_tools::{init_stderr_logging, solver_response};

/// Reads a solver-format request on stdin and prints a random listed move.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_stderr_logging();

    let mut request = String::new();
    io::stdin().read_to_string(&mut request).context("Failed to read solver request")?;
    let answer = solver_response(args.seed, &request).context("Failed to decide a move")?;
    print!("{answer}");
    Ok(())
}
