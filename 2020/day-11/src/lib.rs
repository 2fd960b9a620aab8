mod seating;
pub mod part1;
pub mod part2;
