use std::collections::HashMap;

use miette::*;

use crate::docking::parse;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut memory = HashMap::new();
    for (mask, address, value) in parse(input)? {
        memory.insert(address, mask.apply(value));
    }

    Ok(memory.values().sum::<u64>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X
mem[8] = 11
mem[7] = 101
mem[8] = 0";
        assert_eq!("165", process(input)?);
        Ok(())
    }
}
