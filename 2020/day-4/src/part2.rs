use miette::*;

use crate::passport::{parse_batch, Rules, PARSE_BUDGET};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rules = Rules::new()?;
    let passports = parse_batch(input, PARSE_BUDGET)?;

    let valid = passports
        .iter()
        .filter(|passport| rules.is_valid(passport))
        .count();

    Ok(valid.to_string())
}
