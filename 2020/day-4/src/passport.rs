use std::collections::HashMap;
use std::time::{Duration, Instant};

use miette::*;
use regex::Regex;

/// Batch files that take longer than this to split are rejected.
pub(crate) const PARSE_BUDGET: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Key {
    BirthYear,
    IssueYear,
    ExpirationYear,
    Height,
    HairColor,
    EyeColor,
    PassportId,
    CountryId,
}

impl Key {
    /// Every key except `cid`, which the scanner tolerates missing.
    pub(crate) const REQUIRED: [Key; 7] = [
        Key::BirthYear,
        Key::IssueYear,
        Key::ExpirationYear,
        Key::Height,
        Key::HairColor,
        Key::EyeColor,
        Key::PassportId,
    ];

    fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "byr" => Key::BirthYear,
            "iyr" => Key::IssueYear,
            "eyr" => Key::ExpirationYear,
            "hgt" => Key::Height,
            "hcl" => Key::HairColor,
            "ecl" => Key::EyeColor,
            "pid" => Key::PassportId,
            "cid" => Key::CountryId,
            _ => return None,
        })
    }
}

#[derive(Debug, Default)]
pub(crate) struct Passport<'a> {
    fields: HashMap<Key, &'a str>,
}

impl<'a> Passport<'a> {
    fn insert(&mut self, token: &'a str, line: usize) -> Result<()> {
        let (tag, value) = token
            .split_once(':')
            .ok_or(miette!("Line {line}: `{token}` is not a key:value pair"))?;
        let key = Key::from_tag(tag).ok_or(miette!("Line {line}: unknown key `{tag}`"))?;
        if self.fields.insert(key, value).is_some() {
            bail!("Line {line}: key `{tag}` appears twice in one passport");
        }
        Ok(())
    }

    pub(crate) fn get(&self, key: Key) -> Option<&'a str> {
        self.fields.get(&key).copied()
    }

    pub(crate) fn has_required_fields(&self) -> bool {
        Key::REQUIRED.iter().all(|key| self.fields.contains_key(key))
    }
}

/// Splits a batch file into passports. Passports are separated by blank lines
/// and their fields by any whitespace.
pub(crate) fn parse_batch(input: &str, budget: Duration) -> Result<Vec<Passport<'_>>> {
    let started = Instant::now();
    let mut passports = Vec::new();
    let mut current = Passport::default();

    for (i, line) in input.lines().enumerate() {
        if started.elapsed() > budget {
            bail!("Batch file not split within {budget:?}");
        }
        if line.trim().is_empty() {
            if !current.fields.is_empty() {
                passports.push(std::mem::take(&mut current));
            }
            continue;
        }
        for token in line.split_whitespace() {
            current.insert(token, i + 1)?;
        }
    }
    if !current.fields.is_empty() {
        passports.push(current);
    }

    Ok(passports)
}

/// Value checks for the fields of a passport.
pub(crate) struct Rules {
    hair_color: Regex,
    passport_id: Regex,
    height: Regex,
}

const EYE_COLORS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

impl Rules {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            hair_color: Regex::new(r"^#[0-9a-fA-F]{6}$").into_diagnostic()?,
            passport_id: Regex::new(r"^[0-9]{9}$").into_diagnostic()?,
            height: Regex::new(r"^([0-9]+)(cm|in)$").into_diagnostic()?,
        })
    }

    fn year_between(value: &str, min: u16, max: u16) -> bool {
        value.parse::<u16>().is_ok_and(|year| (min..=max).contains(&year))
    }

    fn height(&self, value: &str) -> bool {
        let Some(captures) = self.height.captures(value) else {
            return false;
        };
        let Ok(amount) = captures[1].parse::<u16>() else {
            return false;
        };
        match &captures[2] {
            "cm" => (150..=193).contains(&amount),
            _ => (59..=76).contains(&amount),
        }
    }

    pub(crate) fn accepts(&self, key: Key, value: &str) -> bool {
        match key {
            Key::BirthYear => Self::year_between(value, 1920, 2002),
            Key::IssueYear => Self::year_between(value, 2010, 2020),
            Key::ExpirationYear => Self::year_between(value, 2020, 2030),
            Key::Height => self.height(value),
            Key::HairColor => self.hair_color.is_match(value),
            Key::EyeColor => EYE_COLORS.contains(&value),
            Key::PassportId => self.passport_id.is_match(value),
            Key::CountryId => true,
        }
    }

    pub(crate) fn is_valid(&self, passport: &Passport) -> bool {
        Key::REQUIRED.iter().all(|&key| {
            passport
                .get(key)
                .is_some_and(|value| self.accepts(key, value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(Key::BirthYear, "2002", true)]
    #[case(Key::BirthYear, "2003", false)]
    #[case(Key::Height, "60in", true)]
    #[case(Key::Height, "190cm", true)]
    #[case(Key::Height, "190in", false)]
    #[case(Key::Height, "190", false)]
    #[case(Key::HairColor, "#123abc", true)]
    #[case(Key::HairColor, "#123abz", false)]
    #[case(Key::HairColor, "123abc", false)]
    #[case(Key::EyeColor, "brn", true)]
    #[case(Key::EyeColor, "wat", false)]
    #[case(Key::EyeColor, "xbrn", false)]
    #[case(Key::PassportId, "000000001", true)]
    #[case(Key::PassportId, "0123456789", false)]
    fn validates_values(#[case] key: Key, #[case] value: &str, #[case] expected: bool) -> Result<()> {
        assert_eq!(Rules::new()?.accepts(key, value), expected);
        Ok(())
    }

    #[test]
    fn rejects_unknown_and_repeated_keys() {
        assert!(parse_batch("byr:1990 foo:bar", PARSE_BUDGET).is_err());
        assert!(parse_batch("byr:1990\nbyr:1991", PARSE_BUDGET).is_err());
        assert!(parse_batch("byr1990", PARSE_BUDGET).is_err());
    }

    #[test]
    fn splits_on_blank_lines() -> Result<()> {
        let passports = parse_batch("byr:1990 iyr:2012\neyr:2025\n\n\ncid:1\n", PARSE_BUDGET)?;

        assert_eq!(passports.len(), 2);
        assert_eq!(passports[0].get(Key::ExpirationYear), Some("2025"));
        assert_eq!(passports[1].get(Key::CountryId), Some("1"));
        Ok(())
    }
}
