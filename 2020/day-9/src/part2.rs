use miette::*;

use crate::xmas::{contiguous_run, first_invalid, parse, PREAMBLE};

/// Sum of the smallest and largest number in the run adding up to the
/// first invalid number.
fn weakness(numbers: &[u64], preamble: usize) -> Result<u64> {
    let invalid = first_invalid(numbers, preamble)
        .ok_or(miette!("Every number is a sum of two of its predecessors"))?;
    let run = contiguous_run(numbers, invalid)
        .ok_or(miette!("No contiguous run adds up to {invalid}"))?;

    let (min, max) = run
        .iter()
        .fold((u64::MAX, u64::MIN), |(min, max), &n| (min.min(n), max.max(n)));
    Ok(min + max)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let numbers = parse(input)?;
    Ok(weakness(&numbers, PREAMBLE)?.to_string())
}
