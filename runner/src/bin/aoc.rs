use clap::Parser;
use miette::*;

use aoc_runner::{
    cli::Cli,
    logging, registry, run,
    table::{self, Row},
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    let solutions = registry::select(registry::all(), cli.latest);
    tracing::info!(puzzles = solutions.len(), latest = cli.latest, "solving");
    let reports = run::solve_all(&solutions)?;

    let rows = reports.iter().map(Row::from).collect::<Vec<_>>();
    println!("{}", table::render(&rows));

    let failed = reports.iter().filter(|report| report.answers.is_err()).count();
    if failed > 0 {
        bail!("{failed} of {} puzzles failed", reports.len());
    }
    Ok(())
}
