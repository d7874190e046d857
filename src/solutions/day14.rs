use anyhow::Result;
use rustc_hash::FxHashSet;

use crate::{parse_number, Error};

const SOURCE: (i32, i32) = (500, 0);

/// Rock and resting sand. `floor` is the lowest rock row; sand stops one row below it.
#[derive(Debug, Clone)]
struct Cave {
    occupied: FxHashSet<(i32, i32)>,
    floor: i32,
}

fn parse_point(text: &str) -> Result<(i32, i32), Error> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| Error::malformed_line(text, "a point like '498,4'"))?;
    Ok((parse_number(x)?, parse_number(y)?))
}

impl Cave {
    fn parse(input: &str) -> Result<Self, Error> {
        let mut occupied = FxHashSet::default();
        for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let points = line
                .split("->")
                .map(|point| parse_point(point.trim()))
                .collect::<Result<Vec<_>, _>>()?;
            for segment in points.windows(2) {
                let ((x0, y0), (x1, y1)) = (segment[0], segment[1]);
                if x0 != x1 && y0 != y1 {
                    return Err(Error::malformed_line(line, "horizontal or vertical segments"));
                }
                let (dx, dy) = ((x1 - x0).signum(), (y1 - y0).signum());
                let (mut x, mut y) = (x0, y0);
                occupied.insert((x, y));
                while (x, y) != (x1, y1) {
                    x += dx;
                    y += dy;
                    occupied.insert((x, y));
                }
            }
            if let &[single] = &points[..] {
                occupied.insert(single);
            }
        }

        let floor = occupied.iter().map(|&(_, y)| y).max().unwrap_or(0);
        Ok(Self { occupied, floor })
    }

    /// Where the next grain comes to rest.
    fn drop_grain(&self) -> (i32, i32) {
        let (mut x, mut y) = SOURCE;
        while y <= self.floor {
            match [x, x - 1, x + 1]
                .into_iter()
                .find(|&next| !self.occupied.contains(&(next, y + 1)))
            {
                Some(next) => {
                    x = next;
                    y += 1;
                }
                None => break,
            }
        }
        (x, y)
    }
}

pub fn day14(input: &str) -> Result<(usize, usize)> {
    let mut cave = Cave::parse(input)?;

    let mut before_floor = None;
    let mut grains = 0;
    loop {
        let grain = cave.drop_grain();
        if before_floor.is_none() && grain.1 >= cave.floor {
            before_floor = Some(grains);
        }
        cave.occupied.insert(grain);
        grains += 1;
        if grain == SOURCE {
            break;
        }
    }

    Ok((before_floor.unwrap_or(grains), grains))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "498,4 -> 498,6 -> 496,6\n503,4 -> 502,4 -> 502,9 -> 494,9\n";

    #[test]
    fn test_day14() -> Result<()> {
        assert_eq!(day14(EXAMPLE)?, (24, 93));
        Ok(())
    }

    #[test]
    fn rasterizes_paths() -> Result<()> {
        let cave = Cave::parse("498,4 -> 498,6 -> 496,6")?;
        assert_eq!(cave.occupied.len(), 5);
        assert!(cave.occupied.contains(&(497, 6)));
        assert_eq!(cave.floor, 6);
        Ok(())
    }

    #[test]
    fn rejects_diagonals_and_bad_points() {
        assert!(Cave::parse("1,1 -> 3,3").is_err());
        assert!(matches!(
            Cave::parse("1,1 -> 3"),
            Err(Error::MalformedLine { .. })
        ));
        assert!(matches!(
            Cave::parse("1,1 -> a,1"),
            Err(Error::MalformedNumber(_))
        ));
    }
}
