use miette::*;

use crate::answers::{parse_groups, Answers};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let groups = parse_groups(input)?;

    let total = groups
        .iter()
        .map(|people| {
            people
                .iter()
                .fold(Answers::MAX, |everyone, person| everyone & person)
                .count_ones()
        })
        .sum::<u32>();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "abc

a
b
c

ab
ac

a
a
a
a

b
";
        assert_eq!("6", process(input)?);
        Ok(())
    }
}
