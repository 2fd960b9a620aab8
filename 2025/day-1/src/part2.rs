use miette::*;

use crate::dial::{parse, Dial};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut dial = Dial::default();

    let password = parse(input)?
        .into_iter()
        .map(|rotation| dial.rotate(rotation))
        .sum::<u64>();

    Ok(password.to_string())
}
