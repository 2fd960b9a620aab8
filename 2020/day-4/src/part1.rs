use miette::*;

use crate::passport::{parse_batch, PARSE_BUDGET};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let passports = parse_batch(input, PARSE_BUDGET)?;

    let complete = passports
        .iter()
        .filter(|passport| passport.has_required_fields())
        .count();

    Ok(complete.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
byr:1937 iyr:2017 cid:147 hgt:183cm

iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
hcl:#cfa07d byr:1929

hcl:#ae17e1 iyr:2013
eyr:2024
ecl:brn pid:760753108 byr:1931
hgt:179cm

hcl:#cfa07d eyr:2025 pid:166559648
iyr:2011 ecl:brn hgt:59in";
        assert_eq!("2", process(input)?);
        Ok(())
    }
}
