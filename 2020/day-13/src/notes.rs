use chumsky::prelude::*;
use miette::*;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Notes {
    pub earliest: u64,
    /// Bus ids by position in the schedule, `None` for an `x`.
    pub buses: Vec<Option<u64>>,
}

fn parser<'a>() -> impl Parser<'a, &'a str, Notes, extra::Err<Rich<'a, char>>> {
    let number = text::int(10)
        .try_map(|digits: &str, span| digits.parse::<u64>().map_err(|e| Rich::custom(span, e)));
    let bus = choice((just('x').to(None), number.clone().map(Some)));

    number
        .then_ignore(text::newline())
        .then(bus.separated_by(just(',')).at_least(1).collect::<Vec<_>>())
        .then_ignore(text::newline().or_not())
        .map(|(earliest, buses)| Notes { earliest, buses })
}

pub(crate) fn parse(input: &str) -> Result<Notes> {
    let notes = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;
    if notes.buses.contains(&Some(0)) {
        bail!("Bus 0 never departs");
    }
    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_out_of_service_buses() -> Result<()> {
        assert_eq!(
            parse("939\n7,x,13\n")?,
            Notes {
                earliest: 939,
                buses: vec![Some(7), None, Some(13)],
            }
        );
        assert!(parse("939\nx,0").is_err());
        Ok(())
    }
}
