use chrono::{DateTime, Utc};

/// An optional, inclusive window over sale dates
///
/// A missing bound means the range is open on that side; it is never
/// confused with the epoch or any other sentinel timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Create a range from optional bounds
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// A range with neither bound, matching every date
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Whether both bounds are absent
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// `start <= date <= end`, skipping any absent bound
    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        self.start.map_or(true, |start| *date >= start)
            && self.end.map_or(true, |end| *date <= end)
    }
}
