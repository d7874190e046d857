//! Front end shared by the per-day binaries.
//!
//! Each binary takes its input files as positional arguments, prints `Part 1: ..` and
//! `Part 2: ..` per file, and exits with status 1 after printing `ERROR: ..` on the first
//! failure.

use std::{fmt::Display, path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Parser;

use crate::{logging, read_input};

#[derive(Debug, Parser)]
pub struct Inputs {
    /// Puzzle input files, solved one after another.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Parses the arguments as `A` and runs `body`, translating the outcome into an exit code.
pub fn run_with<A: Parser>(body: impl FnOnce(A) -> Result<()>) -> ExitCode {
    logging::init();

    let args = match A::try_parse() {
        Ok(args) => args,
        Err(err) if !err.use_stderr() => {
            // --help and --version
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprint!("ERROR: {}", usage_message(&err));
            return ExitCode::FAILURE;
        }
    };

    match body(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// clap's rendering of `err` without its own `error: ` prefix.
fn usage_message(err: &clap::Error) -> String {
    let message = err.to_string();
    match message.strip_prefix("error: ") {
        Some(rest) => rest.to_owned(),
        None => message,
    }
}

/// Runs `solve` over every file named on the command line.
pub fn run<S: Display, T: Display>(solve: fn(&str) -> Result<(S, T)>) -> ExitCode {
    run_with(|inputs: Inputs| {
        let echo = inputs.files.len() > 1;
        for path in &inputs.files {
            let input = read_input(path)?;
            let (part1, part2) = solve(&input)?;
            print_answers(echo.then_some(path.display()), part1, part2);
        }
        Ok(())
    })
}

pub fn print_answers(input_name: Option<impl Display>, part1: impl Display, part2: impl Display) {
    if let Some(name) = &input_name {
        println!("Input file: {}", name);
    }
    println!("Part 1: {}", part1);
    println!("Part 2: {}", part2);
    if input_name.is_some() {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_lose_the_clap_prefix() {
        let err = Inputs::try_parse_from(["day12", "--frobnicate"]).unwrap_err();
        assert!(err.use_stderr());
        let message = usage_message(&err);
        assert!(message.starts_with("unexpected argument"), "{message}");

        let err = Inputs::try_parse_from(["day12"]).unwrap_err();
        assert!(!usage_message(&err).starts_with("error:"));
    }

    #[test]
    fn files_are_positional() {
        let inputs = Inputs::try_parse_from(["day12", "a.txt", "b.txt"]).unwrap();
        assert_eq!(inputs.files, [PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }
}
