use miette::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Add,
    Multiply,
}

impl Op {
    pub(crate) fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Op::Add),
            '*' => Some(Op::Multiply),
            _ => None,
        }
    }

    pub(crate) fn apply(self, numbers: impl IntoIterator<Item = u64>) -> u64 {
        let numbers = numbers.into_iter();
        match self {
            Op::Add => numbers.sum(),
            Op::Multiply => numbers.product(),
        }
    }
}

/// Splits the worksheet into its number rows and the operator row below them.
pub(crate) fn split_rows(input: &str) -> Result<(Vec<&str>, &str)> {
    let mut rows = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>();
    let operators = rows.pop().ok_or(miette!("Empty worksheet"))?;
    if rows.is_empty() {
        bail!("Worksheet has operators but no numbers");
    }
    Ok((rows, operators))
}
