use miette::*;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{self, char, line_ending, multispace0},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{delimited, preceded, separated_pair, terminated},
    Finish, IResult,
};

const WIDTH: usize = 36;

/// A bitmask line split into the bits it forces to one and the floating `X` bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Mask {
    pub ones: u64,
    pub floating: u64,
}

impl Mask {
    fn new(bits: &str) -> Self {
        bits.chars().fold(Mask::default(), |mask, c| Mask {
            ones: (mask.ones << 1) | u64::from(c == '1'),
            floating: (mask.floating << 1) | u64::from(c == 'X'),
        })
    }

    /// Overwrites the non-floating bits of `value`.
    pub(crate) fn apply(self, value: u64) -> u64 {
        (value & self.floating) | self.ones
    }

    /// Every address `address` decodes to: ones forced, floating bits taking
    /// all combinations.
    pub(crate) fn addresses(self, address: u64) -> impl Iterator<Item = u64> {
        let base = (address | self.ones) & !self.floating;
        let floating = self.floating;
        let mut next = Some(floating);
        std::iter::from_fn(move || {
            let subset = next?;
            next = (subset != 0).then(|| (subset - 1) & floating);
            Some(base | subset)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Instruction {
    SetMask(Mask),
    Write { address: u64, value: u64 },
}

fn mask(input: &str) -> IResult<&str, Instruction> {
    map(
        preceded(
            tag("mask = "),
            take_while_m_n(WIDTH, WIDTH, |c| matches!(c, '0' | '1' | 'X')),
        ),
        |bits| Instruction::SetMask(Mask::new(bits)),
    )(input)
}

fn write(input: &str) -> IResult<&str, Instruction> {
    map(
        separated_pair(
            delimited(tag("mem["), complete::u64, char(']')),
            tag(" = "),
            complete::u64,
        ),
        |(address, value)| Instruction::Write { address, value },
    )(input)
}

/// Parses the program and pairs every write with the mask in force.
pub(crate) fn parse(input: &str) -> Result<Vec<(Mask, u64, u64)>> {
    let (_, program) = all_consuming(terminated(
        separated_list1(line_ending, alt((mask, write))),
        multispace0,
    ))(input)
    .finish()
    .map_err(|e| miette!("Parse failed at {:?}: {:?}", e.input.lines().next(), e.code))?;

    let mut current = None;
    let mut writes = Vec::new();
    for (line, instruction) in program.into_iter().enumerate() {
        match instruction {
            Instruction::SetMask(mask) => current = Some(mask),
            Instruction::Write { address, value } => {
                let mask = current.ok_or(miette!("Line {}: write before any mask", line + 1))?;
                writes.push((mask, address, value));
            }
        }
    }
    Ok(writes)
}
