use miette::*;

use aoc2020_day_12::part2;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/input2.txt"))
        .into_diagnostic()
        .wrap_err("failed to read input2.txt")?;
    let result = part2::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
