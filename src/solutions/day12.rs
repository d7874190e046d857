use anyhow::Result;
use memchr::{memchr, memchr_iter};

use crate::{
    graph::{shortest_paths, DistanceMap},
    Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

/// Row-major grid of raw height letters, `S` and `E` included.
#[derive(Debug)]
pub struct HeightMap {
    width: usize,
    height: usize,
    cells: Vec<u8>,
    start: Point,
    end: Point,
}

impl HeightMap {
    pub fn parse(input: &str) -> Result<Self, Error> {
        let bytes = input.as_bytes();
        let mut cells = Vec::with_capacity(bytes.len());
        let mut width = None;
        let mut start = None;
        let mut end = None;
        let mut height = 0;

        let mut line_start = 0;
        for line_end in memchr_iter(b'\n', bytes).chain([bytes.len()]) {
            let line = &bytes[line_start..line_end];
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            line_start = line_end + 1;
            if line.is_empty() {
                continue;
            }

            let malformed =
                || Error::malformed_line(String::from_utf8_lossy(line), "a row of height letters");
            if *width.get_or_insert(line.len()) != line.len() {
                return Err(malformed());
            }
            if !line.iter().all(|&c| c.is_ascii_lowercase() || c == b'S' || c == b'E') {
                return Err(malformed());
            }
            for (marker, found) in [(b'S', &mut start), (b'E', &mut end)] {
                if let Some(x) = memchr(marker, line) {
                    if found.replace(Point { x, y: height }).is_some()
                        || memchr(marker, &line[x + 1..]).is_some()
                    {
                        return Err(Error::malformed_line(
                            String::from_utf8_lossy(line),
                            "a single start and end marker",
                        ));
                    }
                }
            }
            cells.extend_from_slice(line);
            height += 1;
        }

        let (Some(width), Some(start), Some(end)) = (width, start, end) else {
            return Err(Error::malformed_line(input, "a map with 'S' and 'E' markers"));
        };
        Ok(Self {
            width,
            height,
            cells,
            start,
            end,
        })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Height letter with `S` as `a` and `E` as `z`.
    pub fn height(&self, p: Point) -> u8 {
        match self.cells[p.y * self.width + p.x] {
            b'S' => b'a',
            b'E' => b'z',
            h => h,
        }
    }

    pub fn points(&self) -> impl Iterator<Item = Point> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }

    fn neighbours(&self, Point { x, y }: Point) -> impl Iterator<Item = Point> {
        [
            x.checked_sub(1).map(|x| Point { x, y }),
            (x + 1 < self.width).then(|| Point { x: x + 1, y }),
            y.checked_sub(1).map(|y| Point { x, y }),
            (y + 1 < self.height).then(|| Point { x, y: y + 1 }),
        ]
        .into_iter()
        .flatten()
    }

    /// Cells from which a single climbing step (at most one letter up) reaches `p`.
    fn steps_into(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        let height = self.height(p);
        self.neighbours(p).filter(move |&n| self.height(n) + 1 >= height)
    }

    /// Fewest steps from every cell to `E`, found by searching backwards from `E`.
    pub fn distances_to_end(&self) -> DistanceMap<Point> {
        shortest_paths(self.points(), self.end, |p| self.steps_into(p))
    }
}

pub fn day12(input: &str) -> Result<(u64, u64)> {
    let map = HeightMap::parse(input)?;
    let distances = map.distances_to_end();

    let part1 = distances
        .get(map.start())
        .ok_or_else(|| Error::Unreachable("no path leads from 'S' to 'E'".to_owned()))?;
    let part2 = map
        .points()
        .filter(|&p| map.height(p) == b'a')
        .filter_map(|p| distances.get(p))
        .min()
        .unwrap_or(part1);

    Ok((part1, part2))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const EXAMPLE: &str = indoc! {"
        Sabqponm
        abcryxxl
        accszExk
        acctuvwj
        abdefghi
    "};

    #[test]
    fn test_day12() -> Result<()> {
        assert_eq!(day12(EXAMPLE)?, (31, 29));
        Ok(())
    }

    #[test]
    fn two_row_switchback() -> Result<()> {
        let input = indoc! {"
            Sbcdefghijklm
            Eyxwvutsrqpon
        "};
        assert_eq!(day12(input)?, (25, 25));
        Ok(())
    }

    #[test]
    fn path_follows_the_climb() -> Result<()> {
        let map = HeightMap::parse("SbcE\n")?;
        assert_eq!(map.start(), Point { x: 0, y: 0 });
        let distances = map.distances_to_end();
        // c -> z is too steep
        assert_eq!(distances.get(map.start()), None);

        let map = HeightMap::parse("Sbcdefghijklmnopqrstuvwxyz\nzzzzzzzzzzzzzzzzzzzzzzzzzE\n")?;
        let distances = map.distances_to_end();
        let path = distances.path_to(map.start()).unwrap();
        assert_eq!(path.first(), Some(&map.end()));
        assert_eq!(path.last(), Some(&map.start()));
        assert_eq!(distances.get(map.start()), Some(26));
        Ok(())
    }

    #[test]
    fn unreachable_end_is_an_error() {
        let err = day12("SbcE").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Unreachable(_))
        ));
    }

    #[test]
    fn rejects_bad_maps() {
        assert!(HeightMap::parse("Sab\nab\n").is_err());
        assert!(HeightMap::parse("Sa1E").is_err());
        assert!(HeightMap::parse("SabS\nabcE").is_err());
        assert!(HeightMap::parse("abc\nabE").is_err());
    }
}
