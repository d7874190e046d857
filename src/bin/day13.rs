use std::process::ExitCode;

use aoc2022::{cli, solutions::day13};

fn main() -> ExitCode {
    cli::run(day13)
}
