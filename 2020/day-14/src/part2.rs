use std::collections::HashMap;

use miette::*;

use crate::docking::parse;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut memory = HashMap::new();
    for (mask, address, value) in parse(input)? {
        for decoded in mask.addresses(address) {
            memory.insert(decoded, value);
        }
    }

    Ok(memory.values().sum::<u64>().to_string())
}
