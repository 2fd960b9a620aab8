use std::time::{Duration, Instant};

use miette::*;

/// Walks that run longer than this are treated as stuck.
pub(crate) const WALK_BUDGET: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    /// Anything below the last row.
    Abyss,
    Open,
    Tree,
}

/// A slice of forest that repeats endlessly to the right.
#[derive(Debug)]
pub(crate) struct Map {
    width: usize,
    height: usize,
    fields: Vec<Field>,
}

impl Map {
    pub(crate) fn parse(input: &str) -> Result<Self> {
        let mut fields = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, line) in input.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let line = line.trim_end();
            match width {
                None => width = Some(line.len()),
                Some(w) if w != line.len() => {
                    bail!("Row {} has {} fields, expected {}", row + 1, line.len(), w)
                }
                Some(_) => {}
            }

            for (column, c) in line.chars().enumerate() {
                fields.push(match c {
                    '.' => Field::Open,
                    '#' => Field::Tree,
                    _ => bail!("Unexpected '{}' at row {}, column {}", c, row + 1, column + 1),
                });
            }
            height += 1;
        }

        let width = width.ok_or(miette!("Map has no rows"))?;
        Ok(Self {
            width,
            height,
            fields,
        })
    }

    pub(crate) fn field_at(&self, x: usize, y: usize) -> Field {
        if y >= self.height {
            return Field::Abyss;
        }
        self.fields[y * self.width + x % self.width]
    }
}

/// Slides from the top-left corner along `(right, down)` and counts the trees
/// hit before falling off the bottom.
pub(crate) fn trees_on_slope(map: &Map, (right, down): (usize, usize), budget: Duration) -> Result<u64> {
    let started = Instant::now();
    let (mut x, mut y) = (0, 0);
    let mut trees = 0;

    loop {
        if started.elapsed() > budget {
            bail!("Slope ({right}, {down}) did not leave the map within {budget:?}");
        }
        match map.field_at(x, y) {
            Field::Abyss => break,
            Field::Tree => trees += 1,
            Field::Open => {}
        }
        x += right;
        y += down;
    }

    tracing::debug!(right, down, trees, "slope walked");
    Ok(trees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_horizontally() -> Result<()> {
        let map = Map::parse("..#\n#..")?;

        assert_eq!(map.field_at(5, 0), Field::Tree);
        assert_eq!(map.field_at(3, 1), Field::Tree);
        assert_eq!(map.field_at(0, 2), Field::Abyss);
        Ok(())
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(Map::parse("..#\n#.").is_err());
        assert!(Map::parse("..x").is_err());
    }

    #[test]
    fn flat_slope_runs_out_of_time() -> Result<()> {
        let map = Map::parse("..\n..")?;

        assert!(trees_on_slope(&map, (1, 0), Duration::from_millis(20)).is_err());
        Ok(())
    }
}
