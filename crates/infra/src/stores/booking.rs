use std::collections::HashMap;
use std::sync::RwLock;

use fieldops_core::{BookingId, ResourceId, TimeRange};
use fieldops_scheduling::{Booking, BookingStatus, BookingStore, BookingStoreError};

/// In-memory booking table.
///
/// Intended for tests/dev. The `active_for_resource` scan stands in for the
/// (resource_id, start, end) index a real store would serve it from.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    rows: RwLock<HashMap<BookingId, Booking>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every row, unfiltered. Test/inspection helper.
    pub fn all(&self) -> Vec<Booking> {
        self.rows
            .read()
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default()
    }

    fn rows_read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<BookingId, Booking>>, BookingStoreError>
    {
        self.rows
            .read()
            .map_err(|_| BookingStoreError::Unavailable("lock poisoned".to_string()))
    }

    fn rows_write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<BookingId, Booking>>, BookingStoreError>
    {
        self.rows
            .write()
            .map_err(|_| BookingStoreError::Unavailable("lock poisoned".to_string()))
    }
}

impl BookingStore for InMemoryBookingStore {
    fn insert(&self, booking: Booking) -> Result<(), BookingStoreError> {
        let mut rows = self.rows_write()?;
        if rows.contains_key(&booking.id_typed()) {
            return Err(BookingStoreError::DuplicateId);
        }
        rows.insert(booking.id_typed(), booking);
        Ok(())
    }

    fn get(&self, id: BookingId) -> Result<Option<Booking>, BookingStoreError> {
        Ok(self.rows_read()?.get(&id).cloned())
    }

    fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, BookingStoreError> {
        let mut rows = self.rows_write()?;
        let booking = rows.get(&id).cloned().ok_or(BookingStoreError::NotFound)?;
        let updated = booking.with_status(status);
        rows.insert(id, updated.clone());
        Ok(updated)
    }

    fn active_for_resource(
        &self,
        resource_id: ResourceId,
        range: TimeRange,
    ) -> Result<Vec<Booking>, BookingStoreError> {
        Ok(self
            .rows_read()?
            .values()
            .filter(|b| {
                b.resource_id() == resource_id
                    && b.blocks_timeline()
                    && b.period().overlaps(&range)
            })
            .cloned()
            .collect())
    }
}
