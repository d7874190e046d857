use std::process::ExitCode;

use aoc2022::{cli, solutions::day11};

fn main() -> ExitCode {
    cli::run(day11)
}
