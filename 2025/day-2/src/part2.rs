use miette::*;

use crate::ids::{parse, repeats, sum_invalid};

fn digit_count(id: u64) -> usize {
    id.checked_ilog10().map_or(1, |log| log as usize + 1)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let ranges = parse(input)?;
    let total = sum_invalid(&ranges, |id| {
        (2..=digit_count(id)).any(|pieces| repeats(id, pieces))
    });
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,
1698522-1698528,446443-446449,38593856-38593862,565653-565659,
824824821-824824827,2121212118-2121212124
";
        assert_eq!("4174379265", process(input)?);
        Ok(())
    }
}
