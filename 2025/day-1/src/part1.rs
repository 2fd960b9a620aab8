use miette::*;

use crate::dial::{parse, Dial};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut dial = Dial::default();

    let password = parse(input)?
        .into_iter()
        .filter(|&rotation| {
            dial.rotate(rotation);
            dial.position() == 0
        })
        .count();

    Ok(password.to_string())
}
