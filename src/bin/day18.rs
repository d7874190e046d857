use std::process::ExitCode;

use aoc2022::{cli, solutions::day18};

fn main() -> ExitCode {
    cli::run(day18)
}
