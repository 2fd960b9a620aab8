use miette::*;

use crate::game::{parse, spoken_at};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let start = parse(input)?;
    Ok(spoken_at(&start, 2020)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("436", process("0,3,6\n")?);
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert!(process("0,99999999999,6\n").is_err());
    }
}
