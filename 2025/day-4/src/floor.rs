use std::collections::HashSet;

use glam::IVec2;
use miette::*;

/// A forklift can reach a roll with fewer than this many rolls around it.
const CROWDED: usize = 4;

const AROUND: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

/// Positions of the paper rolls on the printing department floor.
#[derive(Debug, Clone)]
pub(crate) struct Floor {
    rolls: HashSet<IVec2>,
}

impl Floor {
    pub(crate) fn parse(input: &str) -> Result<Self> {
        let mut rolls = HashSet::new();
        for (y, line) in input.lines().enumerate() {
            for (x, c) in line.trim_end().chars().enumerate() {
                match c {
                    '@' => {
                        rolls.insert(IVec2::new(x as i32, y as i32));
                    }
                    '.' => {}
                    _ => bail!("Unexpected '{}' at row {}, column {}", c, y + 1, x + 1),
                }
            }
        }
        Ok(Self { rolls })
    }

    pub(crate) fn len(&self) -> usize {
        self.rolls.len()
    }

    fn neighbours(&self, roll: IVec2) -> usize {
        AROUND
            .iter()
            .filter(|&&offset| self.rolls.contains(&(roll + offset)))
            .count()
    }

    /// Rolls a forklift can pick up right now.
    pub(crate) fn accessible(&self) -> Vec<IVec2> {
        self.rolls
            .iter()
            .copied()
            .filter(|&roll| self.neighbours(roll) < CROWDED)
            .collect()
    }

    /// Removes accessible rolls wave after wave until none is left to take,
    /// returning how many were removed.
    pub(crate) fn clear(&mut self) -> usize {
        let before = self.len();
        let mut waves = 0;
        loop {
            let wave = self.accessible();
            if wave.is_empty() {
                break;
            }
            for roll in &wave {
                self.rolls.remove(roll);
            }
            waves += 1;
        }
        tracing::debug!(waves, left = self.len(), "floor cleared");
        before - self.len()
    }
}
