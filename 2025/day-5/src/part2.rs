use aoc_grouping::ranges::covered_len;
use miette::*;

use crate::inventory::parse;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let inventory = parse(input)?;
    Ok(covered_len(&inventory.fresh).to_string())
}
