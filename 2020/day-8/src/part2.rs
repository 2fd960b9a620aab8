use miette::*;
use rayon::prelude::*;

use crate::console::{parse, run, Exit, Op};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let program = parse(input)?;

    // Exactly one `jmp` or `nop` is corrupted; the earliest flip that lets the
    // program terminate wins.
    let acc = (0..program.len())
        .into_par_iter()
        .find_map_first(|i| {
            let flipped = match program[i].op {
                Op::Jmp => Op::Nop,
                Op::Nop => Op::Jmp,
                Op::Acc => return None,
            };
            let mut patched = program.clone();
            patched[i].op = flipped;
            match run(&patched) {
                Exit::Terminated { acc } => Some(acc),
                Exit::Looped { .. } => None,
            }
        })
        .ok_or(miette!("No single jmp/nop flip lets the boot code terminate"))?;

    Ok(acc.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "nop +0
acc +1
jmp +4
acc +3
jmp -3
acc -99
acc +1
jmp -4
acc +6
";
        assert_eq!("8", process(input)?);
        Ok(())
    }

    #[test]
    fn fails_when_no_flip_helps() {
        assert!(process("jmp +0\njmp -1").is_err());
    }
}
