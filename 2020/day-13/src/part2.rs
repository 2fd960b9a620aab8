use miette::*;

use crate::notes::parse;

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Earliest timestamp `t` at which the bus at offset `i` leaves at `t + i`.
///
/// Buses are folded in one by one: once `t` fits the buses so far, stepping
/// by the lcm of their ids keeps them fitting while searching for the next.
fn earliest_alignment(buses: &[Option<u64>]) -> Result<u64> {
    let mut timestamp = 0u64;
    let mut step = 1u64;

    for (offset, bus) in buses.iter().enumerate() {
        let Some(bus) = *bus else { continue };
        let offset = offset as u64;

        // Residues repeat after `bus` steps at the latest.
        let mut tries = 0;
        while (timestamp + offset) % bus != 0 {
            if tries == bus {
                bail!("No timestamp lines up bus {bus} at offset {offset}");
            }
            timestamp += step;
            tries += 1;
        }
        step = step / gcd(step, bus) * bus;
    }

    Ok(timestamp)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let notes = parse(input)?;
    Ok(earliest_alignment(&notes.buses)?.to_string())
}
