use chumsky::prelude::*;
use miette::*;

#[derive(Debug)]
struct Entry<'a> {
    min: usize,
    max: usize,
    letter: char,
    password: &'a str,
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
        .map(|(((min, max), letter), password)| Entry {
            min,
            max,
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

    let valid = entries
        .iter()
        .filter(|entry| {
            let count = entry.password.chars().filter(|&c| c == entry.letter).count();
            (entry.min..=entry.max).contains(&count)
        })
        .count();

    Ok(valid.to_string())
}
