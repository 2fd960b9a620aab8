use miette::*;
use rayon::prelude::*;

use crate::theater::{area, parse, Outline};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let tiles = parse(input)?;
    let outline = Outline::new(&tiles)?;
    let tiles = tiles.as_slice();

    let largest = (0..tiles.len())
        .into_par_iter()
        .flat_map_iter(|i| (i + 1..tiles.len()).map(move |j| (tiles[i], tiles[j])))
        .filter(|&(a, b)| outline.encloses(a, b))
        .map(|(a, b)| area(a, b))
        .max()
        .ok_or(miette!("No rectangle fits inside the loop"))?;

    Ok(largest.to_string())
}
