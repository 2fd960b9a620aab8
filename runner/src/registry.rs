use std::fmt;
use std::path::{Path, PathBuf};

use miette::Result;

/// Entry point shared by both parts of every puzzle.
pub type Solver = fn(&str) -> Result<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    First,
    Second,
}

impl Part {
    pub fn number(self) -> u8 {
        match self {
            Part::First => 1,
            Part::Second => 2,
        }
    }
}

/// One puzzle: where its inputs live and how to solve each part.
#[derive(Debug, Clone, Copy)]
pub struct Solution {
    pub year: u16,
    pub day: u8,
    dir: &'static str,
    first: Solver,
    second: Solver,
}

impl Solution {
    pub const fn new(year: u16, day: u8, dir: &'static str, first: Solver, second: Solver) -> Self {
        Self {
            year,
            day,
            dir,
            first,
            second,
        }
    }

    pub fn solver(&self, part: Part) -> Solver {
        match part {
            Part::First => self.first,
            Part::Second => self.second,
        }
    }

    pub fn input_path(&self, part: Part) -> PathBuf {
        Path::new(self.dir).join(format!("input{}.txt", part.number()))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {}", self.year, self.day)
    }
}

macro_rules! solutions {
    ($($year:literal day $day:literal => $krate:ident),* $(,)?) => {
        [$(
            Solution::new(
                $year,
                $day,
                concat!(env!("CARGO_MANIFEST_DIR"), "/../", $year, "/day-", $day),
                $krate::part1::process,
                $krate::part2::process,
            ),
        )*]
    };
}

/// Every solution in the workspace, oldest puzzle first.
pub fn all() -> Vec<Solution> {
    let mut solutions = solutions![
        2020 day 1 => aoc2020_day_1,
        2020 day 2 => aoc2020_day_2,
        2020 day 3 => aoc2020_day_3,
        2020 day 4 => aoc2020_day_4,
        2020 day 5 => aoc2020_day_5,
        2020 day 6 => aoc2020_day_6,
        2020 day 7 => aoc2020_day_7,
        2020 day 8 => aoc2020_day_8,
        2020 day 9 => aoc2020_day_9,
        2020 day 10 => aoc2020_day_10,
        2020 day 11 => aoc2020_day_11,
        2020 day 12 => aoc2020_day_12,
        2020 day 13 => aoc2020_day_13,
        2020 day 14 => aoc2020_day_14,
        2020 day 15 => aoc2020_day_15,
        2020 day 16 => aoc2020_day_16,
        2025 day 1 => aoc2025_day_1,
        2025 day 2 => aoc2025_day_2,
        2025 day 3 => aoc2025_day_3,
        2025 day 4 => aoc2025_day_4,
        2025 day 5 => aoc2025_day_5,
        2025 day 6 => aoc2025_day_6,
        2025 day 7 => aoc2025_day_7,
        2025 day 8 => aoc2025_day_8,
        2025 day 9 => aoc2025_day_9,
    ]
    .to_vec();
    solutions.sort_by_key(|s| (s.year, s.day));
    solutions
}

/// Narrows `solutions` down to the most recent puzzle when `latest` is set.
pub fn select(solutions: Vec<Solution>, latest: bool) -> Vec<Solution> {
    if !latest {
        return solutions;
    }
    solutions
        .into_iter()
        .max_by_key(|s| (s.year, s.day))
        .into_iter()
        .collect()
}
