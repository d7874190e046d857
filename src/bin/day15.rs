use std::{path::PathBuf, process::ExitCode};

use anyhow::ensure;
use clap::Parser;

use aoc2022::{
    cli::{self, print_answers},
    parse_number, read_input,
    solutions::day15_with_row,
};

/// Sensor reports, each followed by the row to inspect (10 for the example, 2000000 for real
/// input).
#[derive(Debug, Parser)]
struct Args {
    #[arg(required = true, value_names = ["FILE", "ROW"])]
    pairs: Vec<String>,
}

fn main() -> ExitCode {
    cli::run_with(|args: Args| {
        ensure!(
            args.pairs.len() % 2 == 0,
            "expected FILE ROW pairs, got {} arguments",
            args.pairs.len()
        );
        let echo = args.pairs.len() > 2;
        for pair in args.pairs.chunks_exact(2) {
            let path = PathBuf::from(&pair[0]);
            let row = parse_number(&pair[1])?;
            let (part1, part2) = day15_with_row(&read_input(&path)?, row)?;
            print_answers(echo.then_some(path.display()), part1, part2);
        }
        Ok(())
    })
}
