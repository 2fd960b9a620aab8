use clap::Parser;

/// Solves the puzzles in this workspace and prints their answers.
#[derive(Debug, Parser)]
#[command(name = "aoc", version, about)]
pub struct Cli {
    /// Only solve the most recent puzzle.
    #[arg(long)]
    pub latest: bool,
}
