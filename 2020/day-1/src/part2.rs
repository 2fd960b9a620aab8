use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

const TARGET: u64 = 2020;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<u64>, extra::Err<Rich<'a, char>>> {
    text::int(10)
        .try_map(|digits: &str, span| {
            digits.parse::<u64>().map_err(|e| Rich::custom(span, e))
        })
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let entries = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let (a, b, c) = entries
        .iter()
        .tuple_combinations()
        .find(|(a, b, c)| *a + *b + *c == TARGET)
        .ok_or(miette!("No three entries sum to {TARGET}"))?;

    Ok((a * b * c).to_string())
}
