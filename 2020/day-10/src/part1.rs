use counter::Counter;
use miette::*;

use crate::adapters::{chain, MAX_STEP};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let joltages = chain(input)?;

    let steps = joltages
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .collect::<Counter<_>>();
    if let Some(step) = steps.keys().find(|&&step| step > MAX_STEP) {
        bail!("Adapters leave a gap of {step} jolts");
    }

    Ok((steps[&1_u64] * steps[&MAX_STEP]).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("16\n10\n15\n5\n1\n11\n7\n19\n6\n12\n4", "35")]
    #[case(
        "28\n33\n18\n42\n31\n14\n46\n20\n48\n47\n24\n23\n49\n45\n19\n38\n39\n11\n1\n32\n25\n35\n8\n17\n7\n9\n4\n2\n34\n10\n3",
        "220"
    )]
    fn it_works(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn rejects_gaps() {
        assert!(process("1\n2\n9").is_err());
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert!(process("1\n99999999999999999999999").is_err());
    }
}
