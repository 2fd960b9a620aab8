use miette::*;

use crate::console::{parse, run, Exit};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let program = parse(input)?;

    let acc = match run(&program) {
        Exit::Looped { acc } => acc,
        Exit::Terminated { acc } => {
            tracing::warn!(acc, "boot code terminated without looping");
            acc
        }
    };

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
acc +6";
        assert_eq!("5", process(input)?);
        Ok(())
    }
}
