use aoc2020_day_14::*;

fn main() {
    // Run registered benchmarks.
    divan::main();
}

fn input(name: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

#[divan::bench]
fn part1(bencher: divan::Bencher) {
    let input = input("input1.txt");
    bencher.bench(|| part1::process(divan::black_box(&input)));
}

#[divan::bench]
fn part2(bencher: divan::Bencher) {
    let input = input("input2.txt");
    bencher.bench(|| part2::process(divan::black_box(&input)));
}
