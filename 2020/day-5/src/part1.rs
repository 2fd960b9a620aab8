use chumsky::prelude::*;
use miette::*;

/// Reads a run of partition letters as binary, upper halves being ones.
fn binary(halves: &str) -> u32 {
    halves
        .chars()
        .fold(0, |acc, c| (acc << 1) | u32::from(matches!(c, 'B' | 'R')))
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<u32>, extra::Err<Rich<'a, char>>> {
    let row = one_of("FB").repeated().exactly(7).to_slice();
    let column = one_of("LR").repeated().exactly(3).to_slice();

    row.then(column)
        .map(|(row, column)| binary(row) * 8 + binary(column))
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let seats = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let highest = seats.iter().max().ok_or(miette!("No boarding passes"))?;

    Ok(highest.to_string())
}
