mod manifold;
pub mod part1;
pub mod part2;
