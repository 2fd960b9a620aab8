mod rules;
pub mod part1;
pub mod part2;
