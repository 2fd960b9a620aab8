use miette::*;

use crate::notes::parse;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let notes = parse(input)?;

    let (wait, bus) = notes
        .buses
        .iter()
        .flatten()
        .map(|&bus| ((bus - notes.earliest % bus) % bus, bus))
        .min()
        .ok_or(miette!("Every bus is out of service"))?;

    Ok((wait * bus).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "939
7,13,x,x,59,x,31,19";
        assert_eq!("295", process(input)?);
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert!(process("939\n7,99999999999999999999999").is_err());
    }
}
