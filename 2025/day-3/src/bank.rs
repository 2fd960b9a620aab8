use chumsky::prelude::*;
use miette::*;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<u8>>, extra::Err<Rich<'a, char>>> {
    let battery = one_of("0123456789").map(|c: char| c as u8 - b'0');

    battery
        .repeated()
        .at_least(1)
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

pub(crate) fn parse(input: &str) -> Result<Vec<Vec<u8>>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

/// Largest number made of `count` batteries taken in bank order.
///
/// Each pick takes the leftmost highest digit among the positions that
/// still leave enough batteries for the picks after it.
pub(crate) fn max_joltage(bank: &[u8], count: usize) -> Option<u64> {
    if count == 0 || bank.len() < count {
        return None;
    }

    let mut from = 0;
    let mut joltage = 0;
    for left_after in (0..count).rev() {
        let window = &bank[from..bank.len() - left_after];
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, &digit)| digit)?;
        joltage = joltage * 10 + u64::from(digit);
        from += offset + 1;
    }
    Some(joltage)
}

/// Total output of all banks when each turns on `count` batteries.
pub(crate) fn total_joltage(banks: &[Vec<u8>], count: usize) -> Result<u64> {
    banks
        .iter()
        .enumerate()
        .map(|(i, bank)| {
            max_joltage(bank, count).ok_or(miette!(
                "Bank {} has {} batteries, {count} are needed",
                i + 1,
                bank.len()
            ))
        })
        .sum()
}
