use miette::*;

use crate::game::{parse, spoken_at};

const FINAL_TURN: usize = 30_000_000;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let start = parse(input)?;
    Ok(spoken_at(&start, FINAL_TURN)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("175594", process("0,3,6")?);
        Ok(())
    }
}
