//! Closed integer ranges on one axis and their reduction to a minimal cover.

/// The closed range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        debug_assert!(start <= end, "empty interval [{start}, {end}]");
        Self { start, end }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// `end - start`, so a single point has span 0.
    pub fn span(&self) -> i64 {
        self.end - self.start
    }

    /// Number of integer positions covered.
    pub fn positions(&self) -> u64 {
        self.span().unsigned_abs() + 1
    }

    pub fn contains(&self, x: i64) -> bool {
        (self.start..=self.end).contains(&x)
    }

    /// Overlapping or directly adjacent (`[1, 3]` and `[4, 6]` touch).
    pub fn touches(&self, other: &Interval) -> bool {
        (self.start <= other.end && other.start <= self.end)
            || self.end + 1 == other.start
            || other.end + 1 == self.start
    }

    /// Smallest interval containing both.
    pub fn merge(&self, other: &Interval) -> Interval {
        Interval::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// The part of `self` inside `bounds`, `None` when they are disjoint.
    pub fn clamp_to(&self, bounds: &Interval) -> Option<Interval> {
        let start = self.start.max(bounds.start);
        let end = self.end.min(bounds.end);
        (start <= end).then(|| Interval::new(start, end))
    }
}

/// Sorted intervals for a single row, no two of which touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCover {
    row: i64,
    intervals: Vec<Interval>,
}

impl RowCover {
    /// Clamps every interval to `bounds` (if any), sorts by `(start, end)` and merges neighbours
    /// while they touch.
    pub fn reduce(
        row: i64,
        intervals: impl IntoIterator<Item = Interval>,
        bounds: Option<Interval>,
    ) -> Self {
        let mut sorted: Vec<Interval> = intervals
            .into_iter()
            .filter_map(|interval| match &bounds {
                Some(bounds) => interval.clamp_to(bounds),
                None => Some(interval),
            })
            .collect();
        sorted.sort_unstable();

        let mut reduced: Vec<Interval> = Vec::with_capacity(sorted.len());
        for interval in sorted {
            match reduced.last_mut() {
                Some(last) if last.touches(&interval) => *last = last.merge(&interval),
                _ => reduced.push(interval),
            }
        }

        Self {
            row,
            intervals: reduced,
        }
    }

    pub fn row(&self) -> i64 {
        self.row
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn contains(&self, x: i64) -> bool {
        self.intervals.iter().any(|interval| interval.contains(x))
    }

    /// Sum of the spans (`end - start`) of the cover.
    pub fn total_length(&self) -> i64 {
        self.intervals.iter().map(Interval::span).sum()
    }

    pub fn covered_positions(&self) -> u64 {
        self.intervals.iter().map(Interval::positions).sum()
    }

    /// The single uncovered position between exactly two intervals.
    ///
    /// Touching intervals are always merged, so two remaining intervals have a gap of at least
    /// one; only a gap of exactly one qualifies.
    pub fn gap(&self) -> Option<i64> {
        match self.intervals.as_slice() {
            [left, right] if left.end + 2 == right.start => Some(left.end + 1),
            _ => None,
        }
    }
}
