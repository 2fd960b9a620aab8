use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

pub(crate) const PREAMBLE: usize = 25;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<u64>, extra::Err<Rich<'a, char>>> {
    text::int(10)
        .try_map(|digits: &str, span| {
            digits.parse::<u64>().map_err(|e| Rich::custom(span, e))
        })
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

pub(crate) fn parse(input: &str) -> Result<Vec<u64>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

/// First number after the preamble that is not the sum of two distinct
/// entries among the `preamble` numbers right before it.
pub(crate) fn first_invalid(numbers: &[u64], preamble: usize) -> Option<u64> {
    numbers.windows(preamble + 1).find_map(|window| {
        let (&candidate, previous) = window.split_last()?;
        let valid = previous
            .iter()
            .tuple_combinations()
            .any(|(a, b)| a + b == candidate);
        (!valid).then_some(candidate)
    })
}

/// A contiguous run of at least two numbers adding up to `target`.
pub(crate) fn contiguous_run(numbers: &[u64], target: u64) -> Option<&[u64]> {
    let (mut start, mut sum) = (0, 0);
    for (end, &n) in numbers.iter().enumerate() {
        sum += n;
        while sum > target && start < end {
            sum -= numbers[start];
            start += 1;
        }
        if sum == target && end > start {
            return Some(&numbers[start..=end]);
        }
    }
    None
}
