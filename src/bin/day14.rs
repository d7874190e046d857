use std::process::ExitCode;

use aoc2022::{cli, solutions::day14};

fn main() -> ExitCode {
    cli::run(day14)
}
