//! Free/busy computation over a resource's timeline.

use fieldops_core::{DomainError, DomainResult, ResourceId, TimeRange};

use crate::booking::Booking;
use crate::store::{BookingStore, BookingStoreError};

/// Compute the free intervals of `range` left by `bookings`.
///
/// Pure sweep: filter to bookings that block the timeline, clip to the query
/// range, sort by start ascending (tie-break: earlier end, then lower
/// booking id, for determinism), merge overlaps, and emit the complement.
/// Overlapping bookings should not exist given the scheduler invariant, but
/// the merge tolerates them.
pub fn free_intervals(range: TimeRange, bookings: &[Booking]) -> Vec<TimeRange> {
    let mut busy: Vec<(TimeRange, uuid::Uuid)> = bookings
        .iter()
        .filter(|b| b.blocks_timeline())
        .filter_map(|b| {
            b.period()
                .intersect(&range)
                .map(|clipped| (clipped, *b.id_typed().as_uuid()))
        })
        .collect();

    busy.sort_by(|a, b| {
        a.0.start()
            .cmp(&b.0.start())
            .then(a.0.end().cmp(&b.0.end()))
            .then(a.1.cmp(&b.1))
    });

    let mut merged: Vec<TimeRange> = Vec::with_capacity(busy.len());
    for (interval, _) in busy {
        match merged.last_mut() {
            Some(last) if last.overlaps(&interval) => {
                *last = last.merge(&interval).unwrap_or(*last);
            }
            _ => merged.push(interval),
        }
    }

    let mut free = Vec::new();
    let mut cursor = range.start();
    for interval in &merged {
        if interval.start() > cursor {
            // Safe: interval.start > cursor, so the range is non-empty.
            if let Ok(gap) = TimeRange::new(cursor, interval.start()) {
                free.push(gap);
            }
        }
        cursor = cursor.max(interval.end());
    }
    if cursor < range.end() {
        if let Ok(tail) = TimeRange::new(cursor, range.end()) {
            free.push(tail);
        }
    }

    free
}

/// Reads a resource's bookings and exposes its free windows.
///
/// Recomputed from scratch on every call - bookings change between calls, so
/// nothing here is cached. Lock-free: reads come from whatever snapshot the
/// store serves.
#[derive(Debug, Clone)]
pub struct AvailabilityEngine<B> {
    store: B,
}

impl<B> AvailabilityEngine<B>
where
    B: BookingStore,
{
    pub fn new(store: B) -> Self {
        Self { store }
    }

    /// Ordered free intervals for `resource_id` within `range`.
    ///
    /// Zero bookings yields the entire range; a fully covered range yields
    /// an empty vec. Both are ordinary values, not errors.
    pub fn availability(
        &self,
        resource_id: ResourceId,
        range: TimeRange,
    ) -> DomainResult<Vec<TimeRange>> {
        let bookings = self
            .store
            .active_for_resource(resource_id, range)
            .map_err(|e| match e {
                BookingStoreError::Unavailable(msg) => DomainError::store_unavailable(msg),
                BookingStoreError::NotFound => DomainError::NotFound,
                BookingStoreError::DuplicateId => DomainError::conflict("duplicate booking id"),
            })?;
        Ok(free_intervals(range, &bookings))
    }
}
