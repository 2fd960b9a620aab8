use chumsky::prelude::*;
use miette::*;

fn binary(halves: &str) -> u32 {
    halves
        .chars()
        .fold(0, |acc, c| (acc << 1) | u32::from(matches!(c, 'B' | 'R')))
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<u32>, extra::Err<Rich<'a, char>>> {
    let row = one_of("FB").repeated().exactly(7).to_slice();
    let column = one_of("LR").repeated().exactly(3).to_slice();

    row.then(column)
        .map(|(row, column)| binary(row) * 8 + binary(column))
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// The only free seat whose neighbours on both sides are taken.
fn missing_seat(mut seats: Vec<u32>) -> Option<u32> {
    seats.sort_unstable();
    seats
        .windows(2)
        .find(|pair| pair[1] == pair[0] + 2)
        .map(|pair| pair[0] + 1)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let seats = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let seat = missing_seat(seats).ok_or(miette!("No free seat between two taken ones"))?;

    Ok(seat.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        // Seats 117 to 122 minus 120.
        let input = "FFFBBBFRLR
FFFBBBFRRL
FFFBBBFRRR
FFFBBBBLLR
FFFBBBBLRL
";
        assert_eq!("120", process(input)?);
        Ok(())
    }

    #[test]
    fn fails_without_a_gap() {
        assert_eq!(missing_seat(vec![10, 12, 11, 13]), None);
        assert!(process("FBFBBFFRLR\nFBFBBFFRRL").is_err());
    }
}
