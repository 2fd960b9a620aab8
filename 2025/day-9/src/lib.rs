mod theater;
pub mod part1;
pub mod part2;
