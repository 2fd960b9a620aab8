use miette::*;
use rayon::prelude::*;

use crate::tickets::{parse, Notes};

/// Field name for every ticket position, worked out by elimination.
fn resolve_positions<'a>(notes: &Notes<'a>) -> Result<Vec<&'a str>> {
    let fields = notes.fields.len();
    if fields > u64::BITS as usize {
        bail!("Too many fields to resolve: {fields}");
    }

    let valid = notes
        .nearby
        .par_iter()
        .filter(|ticket| ticket.iter().all(|&value| notes.fits_any_field(value)))
        .collect::<Vec<_>>();

    // candidates[position]: bitset of fields accepting every value seen there.
    let mut candidates = (0..fields)
        .map(|position| {
            notes
                .fields
                .iter()
                .enumerate()
                .filter(|(_, field)| valid.iter().all(|ticket| field.accepts(ticket[position])))
                .fold(0u64, |set, (i, _)| set | 1 << i)
        })
        .collect::<Vec<_>>();

    let mut assigned = vec![None; fields];
    for _ in 0..fields {
        let (position, field) = candidates
            .iter()
            .enumerate()
            .find(|&(position, set)| assigned[position].is_none() && set.count_ones() == 1)
            .map(|(position, set)| (position, set.trailing_zeros() as usize))
            .ok_or(miette!("Ticket fields cannot be told apart"))?;

        assigned[position] = Some(notes.fields[field].name);
        for set in &mut candidates {
            *set &= !(1 << field);
        }
    }

    Ok(assigned.into_iter().flatten().collect())
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let notes = parse(input)?;
    let positions = resolve_positions(&notes)?;

    let product = positions
        .iter()
        .zip(&notes.mine)
        .filter(|(name, _)| name.starts_with("departure"))
        .map(|(_, &value)| u64::from(value))
        .product::<u64>();

    Ok(product.to_string())
}
