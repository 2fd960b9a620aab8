use std::ops::RangeInclusive;

use chumsky::prelude::*;
use miette::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Field<'a> {
    pub name: &'a str,
    pub ranges: Vec<RangeInclusive<u32>>,
}

impl Field<'_> {
    pub(crate) fn accepts(&self, value: u32) -> bool {
        self.ranges.iter().any(|range| range.contains(&value))
    }
}

#[derive(Debug)]
pub(crate) struct Notes<'a> {
    pub fields: Vec<Field<'a>>,
    pub mine: Vec<u32>,
    pub nearby: Vec<Vec<u32>>,
}

impl Notes<'_> {
    /// Whether some field accepts `value`.
    pub(crate) fn fits_any_field(&self, value: u32) -> bool {
        self.fields.iter().any(|field| field.accepts(value))
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Notes<'a>, extra::Err<Rich<'a, char>>> {
    let number = text::int(10)
        .try_map(|digits: &str, span| digits.parse::<u32>().map_err(|e| Rich::custom(span, e)));
    let range = number
        .clone()
        .then_ignore(just('-'))
        .then(number.clone())
        .map(|(from, to)| from..=to);
    let field = none_of(":\n\r")
        .repeated()
        .at_least(1)
        .to_slice()
        .then_ignore(just(": "))
        .then(range.separated_by(just(" or ")).at_least(1).collect::<Vec<_>>())
        .map(|(name, ranges)| Field { name, ranges });
    let ticket = number.separated_by(just(',')).at_least(1).collect::<Vec<_>>();
    let blank = text::newline().then(text::newline());

    field
        .separated_by(text::newline())
        .at_least(1)
        .collect::<Vec<_>>()
        .then_ignore(blank.clone())
        .then_ignore(just("your ticket:"))
        .then_ignore(text::newline())
        .then(ticket.clone())
        .then_ignore(blank)
        .then_ignore(just("nearby tickets:"))
        .then_ignore(text::newline())
        .then(ticket.separated_by(text::newline()).allow_trailing().collect::<Vec<_>>())
        .map(|((fields, mine), nearby)| Notes {
            fields,
            mine,
            nearby,
        })
}

pub(crate) fn parse(input: &str) -> Result<Notes<'_>> {
    let notes = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let width = notes.fields.len();
    if let Some(ticket) = std::iter::once(&notes.mine)
        .chain(&notes.nearby)
        .find(|ticket| ticket.len() != width)
    {
        bail!("Ticket {:?} does not have one value per field ({width})", ticket);
    }
    Ok(notes)
}
