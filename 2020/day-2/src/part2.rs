use chumsky::prelude::*;
use miette::*;

#[derive(Debug)]
struct Entry<'a> {
    positions: (usize, usize),
    letter: char,
    password: &'a str,
}

impl Entry<'_> {
    /// Positions are 1-based; position 0 never matches.
    fn letter_at(&self, position: usize) -> bool {
        position
            .checked_sub(1)
            .and_then(|i| self.password.chars().nth(i))
            == Some(self.letter)
    }

    fn is_valid(&self) -> bool {
        self.letter_at(self.positions.0) ^ self.letter_at(self.positions.1)
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Entry<'a>>, extra::Err<Rich<'a, char>>> {
    let number = text::int(10)
        .try_map(|digits: &str, span| digits.parse::<usize>().map_err(|e| Rich::custom(span, e)));
    let letter = any().filter(|c: &char| c.is_ascii_alphabetic());

    let entry = number
        .then_ignore(just('-'))
        .then(number)
        .then_ignore(just(' '))
        .then(letter.clone())
        .then_ignore(just(": "))
        .then(letter.repeated().at_least(1).to_slice())
        .map(|((positions, letter), password)| Entry {
            positions,
            letter,
            password,
        });

    entry
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let entries = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let valid = entries.iter().filter(|entry| entry.is_valid()).count();

    Ok(valid.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        let input = "1-3 a: abcde
1-3 b: cdefg
2-9 c: ccccccccc
";
        assert_eq!("1", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("1-3 a: abcde", "1")]
    #[case("1-3 a: abade", "0")]
    #[case("0-2 b: abc", "1")]
    #[case("2-40 b: abc", "1")]
    fn checks_exactly_one_position(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert!(process("1-99999999999999999999999 a: abcde").is_err());
    }
}
