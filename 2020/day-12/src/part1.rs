use glam::I64Vec2;
use miette::*;

use crate::navigation::{parse, rotate, Action};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut position = I64Vec2::ZERO;
    let mut heading = I64Vec2::X;

    for action in parse(input)? {
        match action {
            Action::Move(offset) => position += offset,
            Action::Turn(turns) => heading = rotate(heading, turns),
            Action::Forward(distance) => position += heading * distance,
        }
    }

    Ok((position.x.abs() + position.y.abs()).to_string())
}
