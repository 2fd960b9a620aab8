use aoc_grouping::Grouping;
use miette::*;

use crate::playground::{cable_candidates, parse};

const CONNECTIONS: usize = 1000;
const LARGEST_CIRCUITS: usize = 3;

/// Wires up the `connections` closest pairs and multiplies the sizes of the
/// largest circuits.
fn circuit_product(input: &str, connections: usize) -> Result<usize> {
    let boxes = parse(input)?;
    let edges = cable_candidates(&boxes);

    let mut circuits = Grouping::new(0..boxes.len());
    let stats = circuits.process_edges_in_order(edges.iter().take(connections))?;
    tracing::debug!(?stats, circuits = circuits.group_count(), "cables connected");

    Ok(circuits.top_n_group_sizes_product(LARGEST_CIRCUITS))
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    Ok(circuit_product(input, CONNECTIONS)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::playground::EXAMPLE;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!(40, circuit_product(EXAMPLE, 10)?);
        Ok(())
    }

    #[test]
    fn repeated_boxes_do_not_grow_circuits() -> Result<()> {
        let input = format!("{EXAMPLE}\n{EXAMPLE}");
        assert_eq!(40, circuit_product(&input, 10)?);
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert!(process("1,2,99999999999999999999999\n3,4,5").is_err());
    }
}
