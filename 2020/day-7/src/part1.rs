use miette::*;
use petgraph::visit::{Bfs, Reversed};

use crate::rules::{parse, MY_BAG};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rules = parse(input)?;

    // Walking the rules backwards from our bag reaches every bag that can hold it.
    let holders = Reversed(&rules);
    let mut bfs = Bfs::new(holders, MY_BAG);
    let mut count = 0;
    while let Some(bag) = bfs.next(holders) {
        if bag != MY_BAG {
            count += 1;
        }
    }

    Ok(count.to_string())
}
