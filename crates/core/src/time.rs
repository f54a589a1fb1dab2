//! Half-open time intervals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A half-open interval `[start, end)` on the UTC timeline.
///
/// Construction enforces `end > start`; an empty or inverted range is not
/// representable. Two ranges that merely touch (`a.end == b.start`) do not
/// overlap - adjacency is how back-to-back bookings are expressed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> DomainResult<Self> {
        if end <= start {
            return Err(DomainError::invalid_interval(format!(
                "end ({end}) must be after start ({start})"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether the two half-open ranges share at least one instant.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely within this range.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether a single instant falls inside the range.
    pub fn contains_instant(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }

    /// The intersection of two ranges, if they overlap.
    pub fn intersect(&self, other: &TimeRange) -> Option<TimeRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Self { start, end })
    }

    /// Merge two overlapping or adjacent ranges into their hull.
    ///
    /// Returns `None` when the ranges are disjoint with a gap between them.
    pub fn merge(&self, other: &TimeRange) -> Option<TimeRange> {
        if self.start > other.end || other.start > self.end {
            return None;
        }
        Some(Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        })
    }
}

impl ValueObject for TimeRange {}

impl core::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
