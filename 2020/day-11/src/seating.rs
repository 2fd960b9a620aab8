//! Seat layout of the ferry waiting area and the rules people follow when
//! picking seats.

use glam::IVec2;
use miette::*;
use rayon::prelude::*;
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cell {
    /// Anything outside the layout.
    Abyss,
    Floor,
    EmptySeat,
    OccupiedSeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    fn step(self) -> IVec2 {
        match self {
            Direction::North => IVec2::NEG_Y,
            Direction::NorthEast => IVec2::new(1, -1),
            Direction::East => IVec2::X,
            Direction::SouthEast => IVec2::ONE,
            Direction::South => IVec2::Y,
            Direction::SouthWest => IVec2::new(-1, 1),
            Direction::West => IVec2::NEG_X,
            Direction::NorthWest => IVec2::NEG_ONE,
        }
    }
}

/// Which seats a person takes into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sight {
    /// The eight touching cells.
    Adjacent,
    /// The first seat in each of the eight directions, looking over floor.
    FirstSeat,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Rules {
    pub sight: Sight,
    /// Occupied seats in view that make a person leave.
    pub tolerance: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WaitingArea {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl WaitingArea {
    pub(crate) fn parse(input: &str) -> Result<Self> {
        let rows = input
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let width = rows.first().map_or(0, |row| row.len());
        if width == 0 {
            bail!("Empty seat layout");
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                bail!("Row {} is {} cells wide, expected {}", y + 1, row.len(), width);
            }
            for c in row.chars() {
                cells.push(match c {
                    '.' => Cell::Floor,
                    'L' => Cell::EmptySeat,
                    '#' => Cell::OccupiedSeat,
                    _ => bail!("Unexpected '{}' in row {}", c, y + 1),
                });
            }
        }

        Ok(Self {
            width: i32::try_from(width).into_diagnostic()?,
            height: i32::try_from(rows.len()).into_diagnostic()?,
            cells,
        })
    }

    fn cell(&self, position: IVec2) -> Cell {
        if position.x < 0 || position.y < 0 || position.x >= self.width || position.y >= self.height {
            return Cell::Abyss;
        }
        self.cells[(position.y * self.width + position.x) as usize]
    }

    fn seen(&self, from: IVec2, direction: Direction, sight: Sight) -> Cell {
        let step = direction.step();
        let mut position = from + step;
        match sight {
            Sight::Adjacent => self.cell(position),
            Sight::FirstSeat => loop {
                match self.cell(position) {
                    Cell::Floor => position += step,
                    cell => break cell,
                }
            },
        }
    }

    fn occupied_in_view(&self, from: IVec2, sight: Sight) -> usize {
        Direction::iter()
            .filter(|&direction| self.seen(from, direction, sight) == Cell::OccupiedSeat)
            .count()
    }

    fn next_generation(&self, rules: Rules) -> Self {
        let cells = self
            .cells
            .par_iter()
            .enumerate()
            .map(|(i, &cell)| {
                let i = i as i32;
                let position = IVec2::new(i % self.width, i / self.width);
                match cell {
                    Cell::EmptySeat if self.occupied_in_view(position, rules.sight) == 0 => {
                        Cell::OccupiedSeat
                    }
                    Cell::OccupiedSeat
                        if self.occupied_in_view(position, rules.sight) >= rules.tolerance =>
                    {
                        Cell::EmptySeat
                    }
                    other => other,
                }
            })
            .collect();

        Self { cells, ..*self }
    }

    /// Applies the rules until a generation changes nothing.
    pub(crate) fn settle(self, rules: Rules) -> Self {
        let mut area = self;
        let mut generations = 0;
        loop {
            let next = area.next_generation(rules);
            if next == area {
                tracing::debug!(generations, "seating settled");
                return area;
            }
            area = next;
            generations += 1;
        }
    }

    pub(crate) fn occupied(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::OccupiedSeat)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_past_floor_but_not_past_seats() -> Result<()> {
        let area = WaitingArea::parse(
            ".##.##.
#.#.#.#
##...##
...L...
##...##
#.#.#.#
.##.##.",
        )?;
        let center = IVec2::new(3, 3);

        assert_eq!(area.occupied_in_view(center, Sight::FirstSeat), 0);
        assert_eq!(area.occupied_in_view(center, Sight::Adjacent), 0);
        Ok(())
    }

    #[test]
    fn counts_all_eight_directions() -> Result<()> {
        let area = WaitingArea::parse(
            ".......#.
...#.....
.#.......
.........
..#L....#
....#....
.........
#........
...#.....",
        )?;

        assert_eq!(area.occupied_in_view(IVec2::new(3, 4), Sight::FirstSeat), 8);
        assert_eq!(area.occupied_in_view(IVec2::new(3, 4), Sight::Adjacent), 2);
        Ok(())
    }

    #[test]
    fn outside_is_abyss() -> Result<()> {
        let area = WaitingArea::parse("L.\n.#")?;

        assert_eq!(area.cell(IVec2::new(-1, 0)), Cell::Abyss);
        assert_eq!(area.cell(IVec2::new(1, 1)), Cell::OccupiedSeat);
        assert!(WaitingArea::parse("L.\n.").is_err());
        Ok(())
    }
}
