use itertools::Itertools;
use miette::*;

use crate::theater::{area, parse};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let tiles = parse(input)?;

    let largest = tiles
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| area(a, b))
        .max()
        .ok_or(miette!("No pair of red tiles"))?;

    Ok(largest.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::theater::EXAMPLE;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("50", process(EXAMPLE)?);
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert!(process("1,99999999999999999999999\n2,3").is_err());
    }
}
