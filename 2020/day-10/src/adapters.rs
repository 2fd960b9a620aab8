use chumsky::prelude::*;
use miette::*;

/// Joltage steps an adapter can bridge.
pub(crate) const MAX_STEP: u64 = 3;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<u64>, extra::Err<Rich<'a, char>>> {
    text::int(10)
        .try_map(|digits: &str, span| {
            digits.parse::<u64>().map_err(|e| Rich::custom(span, e))
        })
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// Every joltage in use, sorted: the outlet, each adapter, and the device.
pub(crate) fn chain(input: &str) -> Result<Vec<u64>> {
    let mut joltages = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;
    joltages.sort_unstable();

    let device = joltages.last().ok_or(miette!("No adapters in the bag"))? + MAX_STEP;
    joltages.insert(0, 0);
    joltages.push(device);
    Ok(joltages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_outlet_and_device() -> Result<()> {
        assert_eq!(chain("4\n1\n5\n")?, vec![0, 1, 4, 5, 8]);
        assert!(chain("").is_err());
        Ok(())
    }
}
