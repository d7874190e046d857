use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use aoc2022::{default_input, logging, Solution, ALL_SOLUTIONS};

fn main() -> Result<()> {
    logging::init();

    let mut total = Duration::default();
    for (day, solve) in ALL_SOLUTIONS {
        total += execute_day(day, solve, default_input)?;
    }
    println!("Total processing time: {}", format_duration(total));
    Ok(())
}

fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}

fn execute_day<E>(
    n: usize,
    solve: Solution,
    input_loader: fn(usize) -> Result<String, E>,
) -> Result<Duration>
where
    E: std::error::Error + Send + Sync + 'static,
{
    println!("Day {}:", n);
    let input = input_loader(n)?;

    let start = Instant::now();
    let (part1, part2) = solve(&input).with_context(|| format!("day {} failed", n))?;
    let elapsed = start.elapsed();

    println!("  Part 1: {}", part1);
    println!("  Part 2: {}", part2);
    println!("  Finished in {}", format_duration(elapsed));
    println!("---------------------");
    Ok(elapsed)
}
