use std::collections::HashMap;

use miette::*;

use crate::rules::{parse, Rules, MY_BAG};

/// Bags nested anywhere inside `bag`, not counting `bag` itself.
fn bags_inside<'a>(rules: &Rules<'a>, bag: &'a str, known: &mut HashMap<&'a str, u64>) -> u64 {
    if let Some(&count) = known.get(bag) {
        return count;
    }
    let count = rules
        .edges(bag)
        .map(|(_, inner, &n)| u64::from(n) * (1 + bags_inside(rules, inner, known)))
        .sum();
    known.insert(bag, count);
    count
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rules = parse(input)?;
    let count = bags_inside(&rules, MY_BAG, &mut HashMap::new());
    Ok(count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(
        "light red bags contain 1 bright white bag, 2 muted yellow bags.
dark orange bags contain 3 bright white bags, 4 muted yellow bags.
bright white bags contain 1 shiny gold bag.
muted yellow bags contain 2 shiny gold bags, 9 faded blue bags.
shiny gold bags contain 1 dark olive bag, 2 vibrant plum bags.
dark olive bags contain 3 faded blue bags, 4 dotted black bags.
vibrant plum bags contain 5 faded blue bags, 6 dotted black bags.
faded blue bags contain no other bags.
dotted black bags contain no other bags.",
        "32"
    )]
    #[case(
        "shiny gold bags contain 2 dark red bags.
dark red bags contain 2 dark orange bags.
dark orange bags contain 2 dark yellow bags.
dark yellow bags contain 2 dark green bags.
dark green bags contain 2 dark blue bags.
dark blue bags contain 2 dark violet bags.
dark violet bags contain no other bags.
",
        "126"
    )]
    fn it_works(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }
}
