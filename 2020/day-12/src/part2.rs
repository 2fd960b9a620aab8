use glam::I64Vec2;
use miette::*;

use crate::navigation::{parse, rotate, Action};

/// Waypoint start, relative to the ship: 10 east, 1 north.
const WAYPOINT: I64Vec2 = I64Vec2::new(10, 1);

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut ship = I64Vec2::ZERO;
    let mut waypoint = WAYPOINT;

    for action in parse(input)? {
        match action {
            Action::Move(offset) => waypoint += offset,
            Action::Turn(turns) => waypoint = rotate(waypoint, turns),
            Action::Forward(times) => ship += waypoint * times,
        }
    }

    Ok((ship.x.abs() + ship.y.abs()).to_string())
}
