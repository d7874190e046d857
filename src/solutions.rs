mod day11;
mod day12;
mod day13;
mod day14;
mod day15;
mod day16;
mod day18;

pub use day11::day11;
pub use day12::{day12, HeightMap, Point};
pub use day13::{day13, parse_packets, Packet};
pub use day14::day14;
pub use day15::{day15, day15_with_row, parse_sensors, DistressBeacon, Sensor, DEFAULT_ROW};
pub use day16::{day16, release_alone, release_together, Network, Valve};
pub use day18::{day18, parse_droplet};

#[cfg(test)]
mod tests {
    use crate::*;

    fn execute_day_input(day: usize, input: &str) -> anyhow::Result<(String, String)> {
        let (_, solve) = ALL_SOLUTIONS
            .iter()
            .find(|(n, _)| *n == day)
            .ok_or_else(|| anyhow::anyhow!("no solution for day {}", day))?;
        solve(input)
    }

    #[test]
    fn registry_renders_answers() -> anyhow::Result<()> {
        assert_eq!(
            execute_day_input(14, "498,4 -> 498,6 -> 496,6\n503,4 -> 502,4 -> 502,9 -> 494,9\n")?,
            ("24".to_owned(), "93".to_owned())
        );
        assert_eq!(
            execute_day_input(18, "1,1,1\n2,1,1\n")?,
            ("10".to_owned(), "10".to_owned())
        );
        assert!(execute_day_input(12, "abc\n").is_err());
        Ok(())
    }

    #[test]
    fn days_are_listed_once_in_order() {
        let days: Vec<_> = ALL_SOLUTIONS.iter().map(|(day, _)| *day).collect();
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }
}
