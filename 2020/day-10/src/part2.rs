use miette::*;

use crate::adapters::{chain, MAX_STEP};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let joltages = chain(input)?;

    // ways[i]: distinct arrangements reaching joltages[i] from the outlet.
    let mut ways = vec![0u64; joltages.len()];
    ways[0] = 1;
    for i in 1..joltages.len() {
        ways[i] = (0..i)
            .rev()
            .take_while(|&j| joltages[i] - joltages[j] <= MAX_STEP)
            .map(|j| ways[j])
            .sum();
    }

    let arrangements = ways.last().copied().unwrap_or_default();
    if arrangements == 0 {
        bail!("Adapters cannot reach the device");
    }
    Ok(arrangements.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("16\n10\n15\n5\n1\n11\n7\n19\n6\n12\n4", "8")]
    #[case(
        "28\n33\n18\n42\n31\n14\n46\n20\n48\n47\n24\n23\n49\n45\n19\n38\n39\n11\n1\n32\n25\n35\n8\n17\n7\n9\n4\n2\n34\n10\n3",
        "19208"
    )]
    fn it_works(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }
}
