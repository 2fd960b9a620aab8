use miette::*;

use crate::answers::parse_groups;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let groups = parse_groups(input)?;

    let total = groups
        .iter()
        .map(|people| people.iter().fold(0, |anyone, person| anyone | person).count_ones())
        .sum::<u32>();

    Ok(total.to_string())
}
