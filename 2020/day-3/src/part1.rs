use miette::*;

use crate::map::{trees_on_slope, Map, WALK_BUDGET};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let map = Map::parse(input)?;
    let trees = trees_on_slope(&map, (3, 1), WALK_BUDGET)?;
    Ok(trees.to_string())
}
