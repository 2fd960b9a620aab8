//! The handheld game console: a boot code listing and the machine that runs it.

use miette::*;
use nom::{
    character::complete::{self, alpha1, line_ending, multispace0, space1},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::{separated_pair, terminated},
    Finish, IResult,
};
use nom_locate::LocatedSpan;
use thiserror::Error;

type Span<'a> = LocatedSpan<&'a str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Acc,
    Jmp,
    Nop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Instruction {
    pub op: Op,
    pub arg: i64,
}

#[derive(Debug, Error, Diagnostic)]
#[error("unknown operation `{op}` on line {line}")]
#[diagnostic(
    code(console::unknown_operation),
    help("boot code only knows `acc`, `jmp` and `nop`")
)]
pub(crate) struct UnknownOperation {
    op: String,
    line: u32,
    #[source_code]
    src: String,
    #[label("not an operation")]
    at: SourceSpan,
}

fn instruction(input: Span) -> IResult<Span, (Span, i64)> {
    separated_pair(alpha1, space1, complete::i64)(input)
}

fn listing(input: Span) -> IResult<Span, Vec<(Span, i64)>> {
    terminated(separated_list1(line_ending, instruction), multispace0)(input)
}

pub(crate) fn parse(input: &str) -> Result<Vec<Instruction>> {
    let (_, lines) = all_consuming(listing)(Span::new(input))
        .finish()
        .map_err(|e| {
            miette!(
                "Parse failed on line {}, column {}: {:?}",
                e.input.location_line(),
                e.input.get_utf8_column(),
                e.code
            )
        })?;

    lines
        .into_iter()
        .map(|(op, arg)| -> Result<Instruction> {
            let op = match *op.fragment() {
                "acc" => Op::Acc,
                "jmp" => Op::Jmp,
                "nop" => Op::Nop,
                other => {
                    return Err(UnknownOperation {
                        op: other.to_string(),
                        line: op.location_line(),
                        src: input.to_string(),
                        at: (op.location_offset(), other.len()).into(),
                    }
                    .into())
                }
            };
            Ok(Instruction { op, arg })
        })
        .collect()
}

/// How a run of the boot code ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Exit {
    /// The program counter left the listing.
    Terminated { acc: i64 },
    /// An instruction was about to run for the second time.
    Looped { acc: i64 },
}

pub(crate) fn run(program: &[Instruction]) -> Exit {
    let mut visited = vec![false; program.len()];
    let (mut pc, mut acc) = (0i64, 0i64);

    loop {
        let Some(index) = usize::try_from(pc).ok().filter(|&i| i < program.len()) else {
            return Exit::Terminated { acc };
        };
        if std::mem::replace(&mut visited[index], true) {
            return Exit::Looped { acc };
        }

        let Instruction { op, arg } = program[index];
        match op {
            Op::Acc => {
                acc += arg;
                pc += 1;
            }
            Op::Jmp => pc += arg,
            Op::Nop => pc += 1,
        }
    }
}
