use std::ops::RangeInclusive;

use chumsky::prelude::*;
use miette::*;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Inventory {
    pub fresh: Vec<RangeInclusive<u64>>,
    pub available: Vec<u64>,
}

fn parser<'a>() -> impl Parser<'a, &'a str, Inventory, extra::Err<Rich<'a, char>>> {
    let id = text::int(10)
        .try_map(|digits: &str, span| digits.parse::<u64>().map_err(|e| Rich::custom(span, e)));
    let range = id
        .clone()
        .then_ignore(just('-'))
        .then(id.clone())
        .map(|(first, last)| first..=last);

    range
        .separated_by(text::newline())
        .at_least(1)
        .collect::<Vec<_>>()
        .then_ignore(text::newline().then(text::newline()))
        .then(id.separated_by(text::newline()).allow_trailing().collect::<Vec<_>>())
        .map(|(fresh, available)| Inventory { fresh, available })
}

pub(crate) fn parse(input: &str) -> Result<Inventory> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_both_sections() -> Result<()> {
        assert_eq!(
            parse("3-5\n10-14\n\n1\n5\n")?,
            Inventory {
                fresh: vec![3..=5, 10..=14],
                available: vec![1, 5],
            }
        );
        Ok(())
    }
}
