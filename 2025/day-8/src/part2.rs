use aoc_grouping::{Grouping, SweepOptions};
use miette::*;

use crate::playground::{cable_candidates, parse};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let boxes = parse(input)?;
    let edges = cable_candidates(&boxes);

    let mut circuits = Grouping::new(0..boxes.len());
    let last = circuits.first_edge_that_fully_connects(&edges, SweepOptions::default())?;
    tracing::debug!(step = last.step, "single circuit formed");

    let (a, b) = (boxes[last.edge.a], boxes[last.edge.b]);
    Ok((a.x * b.x).to_string())
}
