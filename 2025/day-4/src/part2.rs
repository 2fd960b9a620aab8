use miette::*;

use crate::floor::Floor;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut floor = Floor::parse(input)?;
    Ok(floor.clear().to_string())
}
