use miette::*;
use rayon::prelude::*;

use crate::tickets::parse;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let notes = parse(input)?;

    let error_rate = notes
        .nearby
        .par_iter()
        .flat_map_iter(|ticket| ticket.iter().copied())
        .filter(|&value| !notes.fits_any_field(value))
        .map(u64::from)
        .sum::<u64>();

    Ok(error_rate.to_string())
}
