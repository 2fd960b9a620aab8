use chumsky::prelude::*;
use miette::*;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<u32>, extra::Err<Rich<'a, char>>> {
    text::int(10)
        .try_map(|digits: &str, span| {
            digits.parse::<u32>().map_err(|e| Rich::custom(span, e))
        })
        .separated_by(just(','))
        .at_least(1)
        .collect()
        .then_ignore(text::whitespace())
}

pub(crate) fn parse(input: &str) -> Result<Vec<u32>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

/// The number spoken on `turn` (1-based) of the memory game.
pub(crate) fn spoken_at(start: &[u32], turn: usize) -> Result<u32> {
    let Some((&first_spoken, earlier)) = start.split_last() else {
        bail!("No starting numbers");
    };
    if turn == 0 {
        bail!("Turns start at 1");
    }
    if turn <= start.len() {
        return Ok(start[turn - 1]);
    }

    // last_turn[n]: the latest turn before the current one on which n was spoken, 0 if never.
    let largest = start.iter().copied().max().unwrap_or_default() as usize;
    let mut last_turn = vec![0u32; turn.max(largest + 1)];
    for (i, &n) in earlier.iter().enumerate() {
        last_turn[n as usize] = i as u32 + 1;
    }

    let mut spoken = first_spoken;
    for current in start.len() as u32..turn as u32 {
        let previous = std::mem::replace(&mut last_turn[spoken as usize], current);
        spoken = if previous == 0 { 0 } else { current - previous };
    }
    Ok(spoken)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn plays_the_first_turns() -> Result<()> {
        let turns = (1..=10)
            .map(|turn| spoken_at(&[0, 3, 6], turn))
            .collect::<Result<Vec<_>>>()?;

        assert_eq!(turns, vec![0, 3, 6, 0, 3, 3, 1, 0, 4, 0]);
        Ok(())
    }

    #[rstest]
    #[case(&[1, 3, 2], 1)]
    #[case(&[2, 1, 3], 10)]
    #[case(&[1, 2, 3], 27)]
    #[case(&[2, 3, 1], 78)]
    #[case(&[3, 2, 1], 438)]
    #[case(&[3, 1, 2], 1836)]
    fn two_thousand_twentieth_turn(#[case] start: &[u32], #[case] expected: u32) -> Result<()> {
        assert_eq!(spoken_at(start, 2020)?, expected);
        Ok(())
    }

    #[test]
    fn rejects_empty_games() {
        assert!(spoken_at(&[], 5).is_err());
        assert!(spoken_at(&[1], 0).is_err());
    }

    #[test]
    fn large_starting_numbers_fit() -> Result<()> {
        assert_eq!(spoken_at(&[5000, 5000], 3)?, 1);
        Ok(())
    }
}
