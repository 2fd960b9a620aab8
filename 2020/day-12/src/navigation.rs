use chumsky::prelude::*;
use glam::I64Vec2;
use miette::*;

/// One line of the navigation instructions. Vectors use x east, y north.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Move(I64Vec2),
    /// Counter-clockwise quarter turns, in `0..4`.
    Turn(u8),
    Forward(i64),
}

fn quarter_turns(degrees: i64, clockwise: bool) -> Option<u8> {
    if degrees % 90 != 0 {
        return None;
    }
    let turns = (degrees / 90).rem_euclid(4) as u8;
    Some(if clockwise { (4 - turns) % 4 } else { turns })
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<(char, i64)>, extra::Err<Rich<'a, char>>> {
    one_of("NESWLRF")
        .then(text::int(10).try_map(|digits: &str, span| {
            digits.parse::<i64>().map_err(|e| Rich::custom(span, e))
        }))
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

pub(crate) fn parse(input: &str) -> Result<Vec<Action>> {
    let lines = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    lines
        .into_iter()
        .map(|(action, value)| -> Result<Action> {
            Ok(match action {
                'N' => Action::Move(I64Vec2::Y * value),
                'S' => Action::Move(I64Vec2::NEG_Y * value),
                'E' => Action::Move(I64Vec2::X * value),
                'W' => Action::Move(I64Vec2::NEG_X * value),
                'L' | 'R' => Action::Turn(
                    quarter_turns(value, action == 'R')
                        .ok_or(miette!("Cannot turn by {value} degrees"))?,
                ),
                _ => Action::Forward(value),
            })
        })
        .collect()
}

/// Rotates counter-clockwise around the origin.
pub(crate) fn rotate(vector: I64Vec2, quarter_turns: u8) -> I64Vec2 {
    (0..quarter_turns).fold(vector, |v, _| v.perp())
}
