use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use maze_core::Maze;
use maze_tools::MazeSummary;

#[derive(Parser)]
#[command(author, version, about = "Validate an architect-format maze file", long_about = None)]
struct Args {
    /// Path to the architect-format maze
    #[arg(short, long)]
    maze: String,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.maze)
        .with_context(|| format!("Failed to read maze file: {}", args.maze))?;
    let maze = Maze::load_from_architect_string(&text)
        .with_context(|| format!("Maze file is not usable: {}", args.maze))?;

    let summary = MazeSummary::of(&maze);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Maze is valid.");
        println!("Size: {}", summary.size);
        println!("Start: {} End: {}", summary.start, summary.end);
        println!("Walls: {}", summary.walls);
        println!("L1 distance: {}", summary.l1_distance);
        println!("Reachable cells: {}/{}", summary.reachable_cells, summary.total_cells);
        println!("Best-case score: {:.6}", summary.best_case_score);
    }
    Ok(())
}
