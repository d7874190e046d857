use std::process::ExitCode;

use aoc2022::{cli, solutions::day12};

fn main() -> ExitCode {
    cli::run(day12)
}
