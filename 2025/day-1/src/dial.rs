use chumsky::prelude::*;
use miette::*;

const POSITIONS: u64 = 100;
const START: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rotation {
    Left(u64),
    Right(u64),
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Rotation>, extra::Err<Rich<'a, char>>> {
    let clicks = text::int(10)
        .try_map(|digits: &str, span| digits.parse::<u64>().map_err(|e| Rich::custom(span, e)));
    let rotation = choice((
        just('L').ignore_then(clicks.clone()).map(Rotation::Left),
        just('R').ignore_then(clicks).map(Rotation::Right),
    ));

    rotation
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

pub(crate) fn parse(input: &str) -> Result<Vec<Rotation>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

/// The safe's dial, numbered `0..100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Dial {
    position: u64,
}

impl Default for Dial {
    fn default() -> Self {
        Self { position: START }
    }
}

impl Dial {
    pub(crate) fn position(self) -> u64 {
        self.position
    }

    /// Turns the dial and returns how many clicks landed on 0 along the way,
    /// the final click included.
    pub(crate) fn rotate(&mut self, rotation: Rotation) -> u64 {
        match rotation {
            Rotation::Right(clicks) => {
                let end = self.position + clicks;
                self.position = end % POSITIONS;
                end / POSITIONS
            }
            Rotation::Left(clicks) => {
                // Clicks needed before the dial first shows 0 again.
                let to_zero = if self.position == 0 {
                    POSITIONS
                } else {
                    self.position
                };
                self.position = (self.position + POSITIONS - clicks % POSITIONS) % POSITIONS;
                if clicks < to_zero {
                    0
                } else {
                    1 + (clicks - to_zero) / POSITIONS
                }
            }
        }
    }
}
