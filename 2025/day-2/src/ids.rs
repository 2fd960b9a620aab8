use std::ops::RangeInclusive;

use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<RangeInclusive<u64>>, extra::Err<Rich<'a, char>>> {
    let id = text::int(10)
        .try_map(|digits: &str, span| digits.parse::<u64>().map_err(|e| Rich::custom(span, e)));

    id.then_ignore(just('-'))
        .then(id.clone())
        .map(|(first, last)| first..=last)
        .padded()
        .separated_by(just(','))
        .allow_trailing()
        .collect()
}

pub(crate) fn parse(input: &str) -> Result<Vec<RangeInclusive<u64>>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

/// Whether the decimal digits of `id` are one block written `pieces` times.
pub(crate) fn repeats(id: u64, pieces: usize) -> bool {
    let digits = id.to_string();
    let len = digits.len();
    pieces > 1 && len % pieces == 0 && digits.as_bytes().chunks(len / pieces).all_equal()
}

/// Sums the ids of every range that `invalid` rejects. Ranges are summed on
/// their own, so an id listed in two ranges counts twice.
pub(crate) fn sum_invalid(ranges: &[RangeInclusive<u64>], invalid: impl Fn(u64) -> bool) -> u64 {
    ranges
        .iter()
        .map(|range| range.clone().filter(|&id| invalid(id)).sum::<u64>())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(11, 2, true)]
    #[case(1010, 2, true)]
    #[case(1011, 2, false)]
    #[case(111, 2, false)]
    #[case(111, 3, true)]
    #[case(824824824, 3, true)]
    #[case(7, 1, false)]
    fn detects_repeated_blocks(#[case] id: u64, #[case] pieces: usize, #[case] expected: bool) {
        assert_eq!(repeats(id, pieces), expected);
    }

    #[test]
    fn reads_ranges_across_lines() -> Result<()> {
        assert_eq!(parse("11-22,\n95-115\n")?, vec![11..=22, 95..=115]);
        Ok(())
    }
}
