use miette::*;

use crate::worksheet::{split_rows, Op};

/// Reads the worksheet right to left, one column at a time. Each column holds
/// one number written top to bottom, and a problem ends at the column carrying
/// its operator.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (rows, operators) = split_rows(input)?;
    let rows = rows.iter().map(|row| row.as_bytes()).collect::<Vec<_>>();
    let operators = operators.as_bytes();
    let width = rows
        .iter()
        .map(|row| row.len())
        .chain([operators.len()])
        .max()
        .unwrap_or_default();

    let mut pending = Vec::new();
    let mut total = 0;
    for column in (0..width).rev() {
        let digits = rows
            .iter()
            .filter_map(|row| row.get(column))
            .filter(|b| b.is_ascii_digit());
        let number = digits.fold(None, |number: Option<u64>, b| {
            Some(number.unwrap_or_default() * 10 + u64::from(b - b'0'))
        });
        pending.extend(number);

        match operators.get(column).copied().unwrap_or(b' ') {
            b' ' => {}
            symbol => {
                let op = Op::from_symbol(symbol as char)
                    .ok_or(miette!("`{}` is not an operator", symbol as char))?;
                total += op.apply(pending.drain(..));
            }
        }
    }

    if !pending.is_empty() {
        bail!("Numbers {:?} have no operator", pending);
    }
    Ok(total.to_string())
}
