use criterion::{criterion_group, criterion_main, Criterion};

use aoc2022::{default_input, ALL_SOLUTIONS};

pub fn criterion_benchmark(c: &mut Criterion) {
    for (day, solve) in ALL_SOLUTIONS {
        // Days without a puzzle input under inputs/ are skipped.
        let Ok(input) = default_input(day) else {
            continue;
        };
        c.bench_function(&format!("day{}", day), |b| b.iter(|| solve(&input)));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
