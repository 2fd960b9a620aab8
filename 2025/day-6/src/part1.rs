use miette::*;

use crate::worksheet::{split_rows, Op};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (rows, operators) = split_rows(input)?;

    let rows = rows
        .iter()
        .map(|row| {
            row.split_whitespace()
                .map(|n| n.parse::<u64>().into_diagnostic())
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    let operators = operators
        .split_whitespace()
        .map(|symbol| {
            let mut chars = symbol.chars();
            match (chars.next().and_then(Op::from_symbol), chars.next()) {
                (Some(op), None) => Ok(op),
                _ => Err(miette!("`{symbol}` is not an operator")),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(row) = rows.iter().find(|row| row.len() != operators.len()) {
        bail!("Row {:?} does not match the {} problems", row, operators.len());
    }

    let total = operators
        .iter()
        .enumerate()
        .map(|(problem, op)| op.apply(rows.iter().map(|row| row[problem])))
        .sum::<u64>();

    Ok(total.to_string())
}
