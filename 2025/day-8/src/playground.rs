use aoc_grouping::{sort_edges, Edge};
use chumsky::prelude::*;
use glam::I64Vec3;
use itertools::Itertools;
use miette::*;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<I64Vec3>, extra::Err<Rich<'a, char>>> {
    let coordinate = text::int(10)
        .try_map(|digits: &str, span| digits.parse::<i64>().map_err(|e| Rich::custom(span, e)));

    coordinate
        .clone()
        .then_ignore(just(','))
        .then(coordinate.clone())
        .then_ignore(just(','))
        .then(coordinate)
        .map(|((x, y), z)| I64Vec3::new(x, y, z))
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// Junction boxes in input order. A box listed twice is the same box.
pub(crate) fn parse(input: &str) -> Result<Vec<I64Vec3>> {
    let boxes = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;
    Ok(boxes.into_iter().unique().collect())
}

/// Every pair of junction boxes, closest first. Items are indices into `boxes`.
pub(crate) fn cable_candidates(boxes: &[I64Vec3]) -> Vec<Edge<usize, i64>> {
    let mut edges = (0..boxes.len())
        .tuple_combinations()
        .map(|(a, b)| Edge::new(a, b, (boxes[a] - boxes[b]).length_squared()))
        .collect::<Vec<_>>();
    sort_edges(&mut edges);
    edges
}

#[cfg(test)]
pub(crate) const EXAMPLE: &str = "162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689";
