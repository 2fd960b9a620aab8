use miette::*;

use crate::seating::{Rules, Sight, WaitingArea};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rules = Rules {
        sight: Sight::Adjacent,
        tolerance: 4,
    };
    let area = WaitingArea::parse(input)?.settle(rules);
    Ok(area.occupied().to_string())
}
