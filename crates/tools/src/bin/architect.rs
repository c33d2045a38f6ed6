use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use maze_tools::{architect_response, init_stderr_logging};
use tracing::info;

/// Reads `<size> <seed>` on stdin and prints a carved maze in architect format.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();
    init_stderr_logging();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input).context("Failed to read architect request")?;
    let maze = architect_response(&input)?;
    info!(request = input.trim(), "maze carved");
    print!("{maze}");
    Ok(())
}
