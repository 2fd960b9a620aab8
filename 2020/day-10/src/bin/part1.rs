use miette::*;

use aoc2020_day_10::part1;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/input1.txt"))
        .into_diagnostic()
        .wrap_err("failed to read input1.txt")?;
    let result = part1::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
