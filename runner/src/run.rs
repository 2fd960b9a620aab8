use std::fs;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use miette::*;
use tracing::{debug, error};

use crate::registry::{Part, Solution};

/// The outcome of solving one puzzle.
#[derive(Debug)]
pub struct Report {
    pub solution: Solution,
    /// Both answers, or the error that stopped the puzzle.
    pub answers: Result<[String; 2]>,
}

fn solve_part(solution: &Solution, part: Part) -> Result<String> {
    let path = solution.input_path(part);
    let input = fs::read_to_string(&path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;

    let started = Instant::now();
    let answer = solution.solver(part)(&input)
        .wrap_err_with(|| format!("{solution} part {} failed", part.number()))?;
    debug!(puzzle = %solution, part = part.number(), elapsed = ?started.elapsed(), "solved");
    Ok(answer)
}

/// Solves both parts. The first failure abandons the puzzle.
pub fn solve(solution: &Solution) -> Result<[String; 2]> {
    Ok([
        solve_part(solution, Part::First)?,
        solve_part(solution, Part::Second)?,
    ])
}

/// Solves every puzzle in order, logging the ones that fail.
pub fn solve_all(solutions: &[Solution]) -> Result<Vec<Report>> {
    let style = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
        .into_diagnostic()?
        .progress_chars("=> ");
    let bar = ProgressBar::new(solutions.len() as u64).with_style(style);

    let reports = solutions
        .iter()
        .map(|solution| {
            bar.set_message(solution.to_string());
            let answers = solve(solution);
            if let Err(report) = &answers {
                error!(puzzle = %solution, error = ?report, "puzzle failed");
            }
            bar.inc(1);
            Report {
                solution: *solution,
                answers,
            }
        })
        .collect();
    bar.finish_and_clear();

    Ok(reports)
}
