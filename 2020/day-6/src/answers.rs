use miette::*;

/// One bit per question `a` to `z`.
pub(crate) type Answers = u32;

/// Groups of people, each person being the set of questions they said yes to.
pub(crate) fn parse_groups(input: &str) -> Result<Vec<Vec<Answers>>> {
    let mut groups = Vec::new();
    let mut group = Vec::new();

    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            if !group.is_empty() {
                groups.push(std::mem::take(&mut group));
            }
            continue;
        }

        let person = line.chars().try_fold(0, |answers: Answers, c| {
            if !c.is_ascii_lowercase() {
                bail!("Line {}: `{}` is not a question", i + 1, c);
            }
            Ok(answers | 1 << (c as u8 - b'a'))
        })?;
        group.push(person);
    }
    if !group.is_empty() {
        groups.push(group);
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_people_as_bitsets() -> Result<()> {
        let groups = parse_groups("ab\nc\n\n\nz\n")?;

        assert_eq!(groups, vec![vec![0b11, 0b100], vec![1 << 25]]);
        Ok(())
    }

    #[test]
    fn rejects_unknown_questions() {
        assert!(parse_groups("abC").is_err());
    }
}
