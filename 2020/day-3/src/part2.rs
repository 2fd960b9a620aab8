use miette::*;

use crate::map::{trees_on_slope, Map, WALK_BUDGET};

const SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let map = Map::parse(input)?;

    let product = SLOPES
        .iter()
        .map(|&slope| trees_on_slope(&map, slope, WALK_BUDGET))
        .product::<Result<u64>>()?;

    Ok(product.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "..##.......
#...#...#..
.#....#..#.
..#.#...#.#
.#...##..#.
..#.##.....
.#.#.#....#
.#........#
#.##...#...
#...##....#
.#..#...#.#
";
        assert_eq!("336", process(input)?);
        Ok(())
    }
}
