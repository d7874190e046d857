use std::process::ExitCode;

use aoc2022::{cli, solutions::day16};

fn main() -> ExitCode {
    cli::run(day16)
}
