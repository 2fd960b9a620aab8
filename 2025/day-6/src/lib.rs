mod worksheet;
pub mod part1;
pub mod part2;
