use bitvec::prelude::*;
use chumsky::prelude::*;
use glam::I64Vec2;
use itertools::Itertools;
use miette::*;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<I64Vec2>, extra::Err<Rich<'a, char>>> {
    let coordinate = text::int(10)
        .try_map(|digits: &str, span| digits.parse::<i64>().map_err(|e| Rich::custom(span, e)));

    coordinate
        .clone()
        .then_ignore(just(','))
        .then(coordinate)
        .map(|(x, y)| I64Vec2::new(x, y))
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// Red tiles in the order they appear, each linked to the next by a straight
/// run of green tiles.
pub(crate) fn parse(input: &str) -> Result<Vec<I64Vec2>> {
    let tiles = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;
    if tiles.len() < 2 {
        bail!("Need at least two red tiles, got {}", tiles.len());
    }
    Ok(tiles)
}

/// Tiles covered by the rectangle with opposite corners `a` and `b`.
pub(crate) fn area(a: I64Vec2, b: I64Vec2) -> i64 {
    let span = (a - b).abs() + I64Vec2::ONE;
    span.x * span.y
}

/// Sorted distinct coordinates along one axis. Value `values[k]` owns cell
/// `2k + 1`; the even cells stand for the gaps between them and the margins.
struct Axis {
    values: Vec<i64>,
}

impl Axis {
    fn new(values: impl Iterator<Item = i64>) -> Self {
        Self {
            values: values.sorted_unstable().dedup().collect(),
        }
    }

    fn cells(&self) -> usize {
        2 * self.values.len() + 1
    }

    fn cell(&self, value: i64) -> Option<usize> {
        self.values.binary_search(&value).ok().map(|k| 2 * k + 1)
    }
}

/// The loop of red and green tiles on a compressed grid, with a summed-area
/// table over the cells lying outside it.
pub(crate) struct Outline {
    columns: Axis,
    rows: Axis,
    /// `outside_before[y * (width + 1) + x]`: outside cells in `[0, x) x [0, y)`.
    outside_before: Vec<u32>,
}

impl Outline {
    pub(crate) fn new(tiles: &[I64Vec2]) -> Result<Self> {
        let columns = Axis::new(tiles.iter().map(|t| t.x));
        let rows = Axis::new(tiles.iter().map(|t| t.y));
        let (width, height) = (columns.cells(), rows.cells());
        let cell = |tile: I64Vec2| -> Result<(usize, usize)> {
            columns
                .cell(tile.x)
                .zip(rows.cell(tile.y))
                .ok_or(miette!("Tile {tile} is off the grid"))
        };

        let mut wall = bitvec![u64, Lsb0; 0; width * height];
        for (&a, &b) in tiles.iter().circular_tuple_windows() {
            if a.x != b.x && a.y != b.y {
                bail!("Red tiles {a} and {b} are not in a straight line");
            }
            let ((ax, ay), (bx, by)) = (cell(a)?, cell(b)?);
            for y in ay.min(by)..=ay.max(by) {
                for x in ax.min(bx)..=ax.max(bx) {
                    wall.set(y * width + x, true);
                }
            }
        }

        // The margins never hold a wall, so flooding from a corner reaches
        // every outside cell.
        let mut outside = bitvec![u64, Lsb0; 0; width * height];
        outside.set(0, true);
        let mut stack = vec![(0usize, 0usize)];
        while let Some((x, y)) = stack.pop() {
            let around = [
                (x.checked_sub(1), Some(y)),
                (Some(x + 1), Some(y)),
                (Some(x), y.checked_sub(1)),
                (Some(x), Some(y + 1)),
            ];
            for (nx, ny) in around {
                let (Some(nx), Some(ny)) = (nx, ny) else { continue };
                if nx >= width || ny >= height {
                    continue;
                }
                let i = ny * width + nx;
                if !wall[i] && !outside[i] {
                    outside.set(i, true);
                    stack.push((nx, ny));
                }
            }
        }

        let stride = width + 1;
        let mut outside_before = vec![0u32; stride * (height + 1)];
        for y in 0..height {
            for x in 0..width {
                outside_before[(y + 1) * stride + x + 1] = u32::from(outside[y * width + x])
                    + outside_before[y * stride + x + 1]
                    + outside_before[(y + 1) * stride + x]
                    - outside_before[y * stride + x];
            }
        }

        Ok(Self {
            columns,
            rows,
            outside_before,
        })
    }

    /// Whether every tile of the rectangle spanned by `a` and `b` is red or
    /// green. Corners off the grid are never enclosed.
    pub(crate) fn encloses(&self, a: I64Vec2, b: I64Vec2) -> bool {
        let (Some(ax), Some(bx), Some(ay), Some(by)) = (
            self.columns.cell(a.x),
            self.columns.cell(b.x),
            self.rows.cell(a.y),
            self.rows.cell(b.y),
        ) else {
            return false;
        };
        let (left, right) = (ax.min(bx), ax.max(bx) + 1);
        let (top, bottom) = (ay.min(by), ay.max(by) + 1);

        let stride = self.columns.cells() + 1;
        let at = |x: usize, y: usize| self.outside_before[y * stride + x];
        at(right, bottom) + at(left, top) - at(right, top) - at(left, bottom) == 0
    }
}

#[cfg(test)]
pub(crate) const EXAMPLE: &str = "7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3";
