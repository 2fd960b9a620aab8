use aoc_grouping::ranges::coalesce;
use miette::*;

use crate::inventory::parse;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let inventory = parse(input)?;
    let fresh = coalesce(&inventory.fresh);

    // Coalesced ranges are disjoint and sorted, so one binary search per id suffices.
    let count = inventory
        .available
        .iter()
        .filter(|&&id| {
            let after = fresh.partition_point(|range| *range.start() <= id);
            after > 0 && fresh[after - 1].contains(&id)
        })
        .count();

    Ok(count.to_string())
}
