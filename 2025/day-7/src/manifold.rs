use miette::*;

/// The tachyon manifold: splitter rows below a single beam source.
#[derive(Debug)]
pub(crate) struct Manifold {
    width: usize,
    /// `splitters[y][x]` is set where a `^` sits.
    splitters: Vec<Vec<bool>>,
    source: (usize, usize),
}

/// What became of the beam after falling through the manifold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Trace {
    /// Splitters hit by at least one beam.
    pub splits: u64,
    /// Distinct paths a single particle can take, counting paths that leave
    /// through the sides or the bottom.
    pub timelines: u128,
}

impl Manifold {
    pub(crate) fn parse(input: &str) -> Result<Self> {
        let mut splitters = Vec::new();
        let mut source = None;

        for (y, line) in input.lines().map(str::trim_end).enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, c) in line.chars().enumerate() {
                match c {
                    '.' => row.push(false),
                    '^' => row.push(true),
                    'S' if source.is_none() => {
                        source = Some((x, y));
                        row.push(false);
                    }
                    'S' => bail!("Second beam source at row {}, column {}", y + 1, x + 1),
                    _ => bail!("Unexpected '{}' at row {}, column {}", c, y + 1, x + 1),
                }
            }
            splitters.push(row);
        }

        let source = source.ok_or(miette!("No beam source 'S'"))?;
        let width = splitters.iter().map(Vec::len).max().unwrap_or_default();
        Ok(Self {
            width,
            splitters,
            source,
        })
    }

    fn is_splitter(&self, x: usize, y: usize) -> bool {
        self.splitters[y].get(x).copied().unwrap_or(false)
    }

    /// Sends the beam down row by row. A splitter stops a beam and starts one
    /// on each side; beams landing on the same column merge but keep their
    /// path counts.
    pub(crate) fn trace(&self) -> Trace {
        let (source_x, source_y) = self.source;
        let mut paths = vec![0u128; self.width];
        paths[source_x] = 1;
        let mut splits = 0;
        let mut escaped = 0u128;

        for y in source_y + 1..self.splitters.len() {
            let mut below = vec![0u128; self.width];
            for (x, &count) in paths.iter().enumerate().filter(|(_, &count)| count > 0) {
                if !self.is_splitter(x, y) {
                    below[x] += count;
                    continue;
                }
                splits += 1;
                for side in [x.checked_sub(1), Some(x + 1).filter(|&r| r < self.width)] {
                    match side {
                        Some(side) => below[side] += count,
                        None => escaped += count,
                    }
                }
            }
            paths = below;
        }

        Trace {
            splits,
            timelines: escaped + paths.iter().sum::<u128>(),
        }
    }
}
