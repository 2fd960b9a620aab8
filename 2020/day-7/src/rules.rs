use miette::*;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{self, alpha1, char, line_ending, multispace0, space1},
    combinator::{all_consuming, recognize, value},
    multi::separated_list1,
    sequence::{separated_pair, terminated},
    Finish, IResult,
};
use petgraph::{algo::is_cyclic_directed, graphmap::DiGraphMap};

pub(crate) const MY_BAG: &str = "shiny gold";

/// Bag colours linked from outer to inner bag, weighted by how many fit.
pub(crate) type Rules<'a> = DiGraphMap<&'a str, u32>;

fn color(input: &str) -> IResult<&str, &str> {
    recognize(separated_pair(alpha1, space1, alpha1))(input)
}

fn content(input: &str) -> IResult<&str, (u32, &str)> {
    terminated(
        separated_pair(complete::u32, space1, color),
        alt((tag(" bags"), tag(" bag"))),
    )(input)
}

fn rule(input: &str) -> IResult<&str, (&str, Vec<(u32, &str)>)> {
    let (input, outer) = terminated(color, tag(" bags contain "))(input)?;
    let (input, inner) = terminated(
        alt((
            value(Vec::new(), tag("no other bags")),
            separated_list1(tag(", "), content),
        )),
        char('.'),
    )(input)?;
    Ok((input, (outer, inner)))
}

pub(crate) fn parse(input: &str) -> Result<Rules<'_>> {
    let (_, rules) = all_consuming(terminated(separated_list1(line_ending, rule), multispace0))(input)
        .finish()
        .map_err(|e| miette!("Parse failed at {:?}: {:?}", e.input.lines().next(), e.code))?;

    let mut graph = Rules::new();
    for (outer, inner) in rules {
        graph.add_node(outer);
        for (count, bag) in inner {
            graph.add_edge(outer, bag, count);
        }
    }

    if !graph.contains_node(MY_BAG) {
        bail!("No rule mentions a {MY_BAG} bag");
    }
    if is_cyclic_directed(&graph) {
        bail!("Bags contain themselves through a cycle of rules");
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_outer_to_inner_bags() -> Result<()> {
        let rules = parse(
            "shiny gold bags contain 1 dark olive bag, 2 vibrant plum bags.\ndark olive bags contain no other bags.\n",
        )?;

        assert_eq!(rules.node_count(), 3);
        assert_eq!(rules.edge_weight(MY_BAG, "vibrant plum"), Some(&2));
        assert_eq!(rules.neighbors("dark olive").count(), 0);
        Ok(())
    }

    #[test]
    fn rejects_cycles() {
        let input = "shiny gold bags contain 1 dark olive bag.
dark olive bags contain 3 shiny gold bags.";
        assert!(parse(input).is_err());
    }
}
