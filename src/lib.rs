pub mod cli;
pub mod error;
pub mod graph;
pub mod interval;
pub mod logging;
pub mod search;
pub mod solutions;
pub mod voxel;

use std::{fmt::Display, path::Path, str::FromStr};

use anyhow::Result;

pub use error::Error;

/// A day's solver with both answers already rendered for printing.
pub type Solution = fn(&str) -> Result<(String, String)>;

pub const ALL_SOLUTIONS: [(usize, Solution); 7] = [
    (11, |input| rendered(solutions::day11(input))),
    (12, |input| rendered(solutions::day12(input))),
    (13, |input| rendered(solutions::day13(input))),
    (14, |input| rendered(solutions::day14(input))),
    (15, |input| rendered(solutions::day15(input))),
    (16, |input| rendered(solutions::day16(input))),
    (18, |input| rendered(solutions::day18(input))),
];

fn rendered<S: Display, T: Display>(answers: Result<(S, T)>) -> Result<(String, String)> {
    answers.map(|(part1, part2)| (part1.to_string(), part2.to_string()))
}

pub fn read_input(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| Error::FileOpen {
        path: path.to_owned(),
        source,
    })
}

pub fn default_input(n: usize) -> Result<String, Error> {
    read_input(format!("inputs/{}.txt", n))
}

/// Parses a whole token as a number, reporting the offending text when it isn't one.
pub fn parse_number<T: FromStr>(text: &str) -> Result<T, Error> {
    text.trim()
        .parse()
        .map_err(|_| Error::MalformedNumber(text.to_owned()))
}
