use miette::*;

use crate::bank::{parse, total_joltage};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parse(input)?;
    Ok(total_joltage(&banks, 12)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "987654321111111
811111111111119
234234234234278
818181911112111
";
        assert_eq!("3121910778619", process(input)?);
        Ok(())
    }
}
