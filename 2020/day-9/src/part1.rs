use miette::*;

use crate::xmas::{first_invalid, parse, PREAMBLE};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let numbers = parse(input)?;
    if numbers.len() <= PREAMBLE {
        bail!("Need more than {PREAMBLE} numbers, got {}", numbers.len());
    }

    let invalid = first_invalid(&numbers, PREAMBLE)
        .ok_or(miette!("Every number is a sum of two of its predecessors"))?;

    Ok(invalid.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        // 1..=25 in order, then 26 (valid) and 100 (not a pair sum).
        let input = (1..=26)
            .chain([100])
            .map(|n: u64| n.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!("100", process(&input)?);
        Ok(())
    }

    #[test]
    fn rejects_short_input() {
        assert!(process("1\n2\n3").is_err());
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert!(process("99999999999999999999999").is_err());
    }
}
