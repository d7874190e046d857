use std::fmt;

use anyhow::Result;
use regex::Regex;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{
    interval::{Interval, RowCover},
    parse_number, Error,
};

/// Row asked about by the real puzzle input; part 2 searches twice as far.
pub const DEFAULT_ROW: i64 = 2_000_000;

const TUNING_MULTIPLIER: i64 = 4_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn manhattan(&self, other: &Position) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sensor {
    pub position: Position,
    pub beacon: Position,
    pub radius: i64,
}

impl Sensor {
    pub fn new(position: Position, beacon: Position) -> Self {
        Self {
            position,
            beacon,
            radius: position.manhattan(&beacon),
        }
    }

    /// The x range this sensor rules out on `row`: `|x - X| <= radius - |row - Y|`.
    pub fn coverage(&self, row: i64) -> Option<Interval> {
        let reach = self.radius - (self.position.y - row).abs();
        (reach >= 0).then(|| Interval::new(self.position.x - reach, self.position.x + reach))
    }
}

/// Answer to part 2, which may legitimately not exist for a given search area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistressBeacon(pub Option<Position>);

impl DistressBeacon {
    pub fn tuning_frequency(&self) -> Option<i64> {
        self.0.map(|p| p.x * TUNING_MULTIPLIER + p.y)
    }
}

impl fmt::Display for DistressBeacon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tuning_frequency() {
            Some(frequency) => write!(f, "{}", frequency),
            None => f.write_str("no distress beacon found"),
        }
    }
}

pub fn parse_sensors(input: &str) -> Result<Vec<Sensor>> {
    let re = Regex::new(
        r"^Sensor at x=(-?[0-9]+), y=(-?[0-9]+): closest beacon is at x=(-?[0-9]+), y=(-?[0-9]+)$",
    )?;
    input
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(|line| -> Result<Sensor> {
            let caps = re
                .captures(line)
                .ok_or_else(|| Error::malformed_line(line, "a sensor report"))?;
            let number = |i: usize| parse_number::<i64>(&caps[i]);
            Ok(Sensor::new(
                Position {
                    x: number(1)?,
                    y: number(2)?,
                },
                Position {
                    x: number(3)?,
                    y: number(4)?,
                },
            ))
        })
        .collect()
}

pub fn row_cover(sensors: &[Sensor], row: i64, bounds: Option<Interval>) -> RowCover {
    RowCover::reduce(
        row,
        sensors.iter().filter_map(|sensor| sensor.coverage(row)),
        bounds,
    )
}

/// Positions on `row` that cannot hold a beacon.
pub fn excluded_positions(sensors: &[Sensor], row: i64) -> u64 {
    let reach = sensors.iter().map(|s| s.radius).max().unwrap_or(0);
    let min_x = sensors
        .iter()
        .map(|s| s.position.x.min(s.beacon.x))
        .min()
        .unwrap_or(0);
    let max_x = sensors
        .iter()
        .map(|s| s.position.x.max(s.beacon.x))
        .max()
        .unwrap_or(0);
    let cover = row_cover(sensors, row, Some(Interval::new(min_x - reach, max_x + reach)));

    let beacons_on_row = sensors
        .iter()
        .map(|s| s.beacon)
        .filter(|beacon| beacon.y == row && cover.contains(beacon.x))
        .collect::<FxHashSet<_>>()
        .len() as u64;
    cover.covered_positions() - beacons_on_row
}

/// Scans rows `0..=limit` for the one row whose cover inside `[0, limit]` leaves a single gap.
/// A negative `limit` is an empty search area.
pub fn find_distress_beacon(sensors: &[Sensor], limit: i64) -> DistressBeacon {
    if limit < 0 {
        return DistressBeacon(None);
    }
    let bounds = Interval::new(0, limit);
    let found = (0..=limit).find_map(|y| {
        let cover = row_cover(sensors, y, Some(bounds));
        cover.gap().map(|x| Position { x, y: cover.row() })
    });
    debug!(?found, limit, "distress beacon search finished");
    DistressBeacon(found)
}

pub fn day15_with_row(input: &str, row: i64) -> Result<(u64, DistressBeacon)> {
    let limit = row.checked_mul(2).ok_or_else(|| {
        Error::malformed_line(row.to_string(), "a row whose doubled value fits in i64")
    })?;
    let sensors = parse_sensors(input)?;
    Ok((
        excluded_positions(&sensors, row),
        find_distress_beacon(&sensors, limit),
    ))
}

pub fn day15(input: &str) -> Result<(u64, DistressBeacon)> {
    day15_with_row(input, DEFAULT_ROW)
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const EXAMPLE: &str = indoc! {"
        Sensor at x=2, y=18: closest beacon is at x=-2, y=15
        Sensor at x=9, y=16: closest beacon is at x=10, y=16
        Sensor at x=13, y=2: closest beacon is at x=15, y=3
        Sensor at x=12, y=14: closest beacon is at x=10, y=16
        Sensor at x=10, y=20: closest beacon is at x=10, y=16
        Sensor at x=14, y=17: closest beacon is at x=10, y=16
        Sensor at x=8, y=7: closest beacon is at x=2, y=10
        Sensor at x=2, y=0: closest beacon is at x=2, y=10
        Sensor at x=0, y=11: closest beacon is at x=2, y=10
        Sensor at x=20, y=14: closest beacon is at x=25, y=17
        Sensor at x=17, y=20: closest beacon is at x=21, y=22
        Sensor at x=16, y=7: closest beacon is at x=15, y=3
        Sensor at x=14, y=3: closest beacon is at x=15, y=3
        Sensor at x=20, y=1: closest beacon is at x=15, y=3
    "};

    #[test]
    fn test_day15() -> Result<()> {
        let (part1, part2) = day15_with_row(EXAMPLE, 10)?;
        assert_eq!(part1, 26);
        assert_eq!(part2.0, Some(Position { x: 14, y: 11 }));
        assert_eq!(part2.to_string(), "56000011");
        Ok(())
    }

    #[test]
    fn four_sensors_on_one_row() -> Result<()> {
        let input = indoc! {"
            Sensor at x=0, y=0: closest beacon is at x=2, y=0
            Sensor at x=10, y=0: closest beacon is at x=10, y=3
            Sensor at x=5, y=1: closest beacon is at x=5, y=3
            Sensor at x=20, y=5: closest beacon is at x=20, y=6
        "};
        let sensors = parse_sensors(input)?;
        let cover = row_cover(&sensors, 0, None);
        // [-2, 2] stays apart, [4, 6] and [7, 13] are adjacent.
        assert_eq!(
            cover.intervals(),
            [Interval::new(-2, 2), Interval::new(4, 13)]
        );
        // 5 + 10 positions, minus the beacon at x=2.
        assert_eq!(excluded_positions(&sensors, 0), 14);
        Ok(())
    }

    #[test]
    fn missing_beacon_is_reported() -> Result<()> {
        let (_, part2) = day15_with_row("Sensor at x=0, y=0: closest beacon is at x=2, y=0\n", 0)?;
        assert_eq!(part2, DistressBeacon(None));
        assert_eq!(part2.to_string(), "no distress beacon found");
        Ok(())
    }

    #[test]
    fn rows_outside_the_search_area() -> Result<()> {
        let report = "Sensor at x=0, y=0: closest beacon is at x=2, y=0\n";
        let (part1, part2) = day15_with_row(report, -1)?;
        assert_eq!(part1, 3);
        assert_eq!(part2, DistressBeacon(None));

        let err = day15_with_row(report, i64::MAX / 2 + 1).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MalformedLine { .. })
        ));
        Ok(())
    }

    #[test]
    fn malformed_reports_fail() {
        let err = parse_sensors("Sensor at x=1, y=2: closest beacon is at x=3\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MalformedLine { .. })
        ));
        let err =
            parse_sensors("Sensor at x=99999999999999999999, y=2: closest beacon is at x=3, y=4")
                .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MalformedNumber(_))
        ));
    }
}
