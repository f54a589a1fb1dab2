//! Booking persistence boundary.

use thiserror::Error;

use fieldops_core::{BookingId, ResourceId, TimeRange};

use crate::booking::{Booking, BookingStatus};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingStoreError {
    /// The store could not be reached or the transaction failed transiently.
    /// The scheduler retries these with backoff at the commit boundary.
    #[error("booking store unavailable: {0}")]
    Unavailable(String),

    #[error("booking not found")]
    NotFound,

    /// An insert reused an existing identifier.
    #[error("duplicate booking id")]
    DuplicateId,
}

impl BookingStoreError {
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Storage contract for bookings.
///
/// `active_for_resource` is the availability sweep's access path; backing
/// stores are expected to serve it from an index on
/// (resource_id, start, end).
pub trait BookingStore: Send + Sync {
    fn insert(&self, booking: Booking) -> Result<(), BookingStoreError>;

    fn get(&self, id: BookingId) -> Result<Option<Booking>, BookingStoreError>;

    fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, BookingStoreError>;

    /// All pending/confirmed bookings for the resource whose interval
    /// intersects `range`.
    fn active_for_resource(
        &self,
        resource_id: ResourceId,
        range: TimeRange,
    ) -> Result<Vec<Booking>, BookingStoreError>;
}

impl<S> BookingStore for std::sync::Arc<S>
where
    S: BookingStore + ?Sized,
{
    fn insert(&self, booking: Booking) -> Result<(), BookingStoreError> {
        (**self).insert(booking)
    }

    fn get(&self, id: BookingId) -> Result<Option<Booking>, BookingStoreError> {
        (**self).get(id)
    }

    fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, BookingStoreError> {
        (**self).update_status(id, status)
    }

    fn active_for_resource(
        &self,
        resource_id: ResourceId,
        range: TimeRange,
    ) -> Result<Vec<Booking>, BookingStoreError> {
        (**self).active_for_resource(resource_id, range)
    }
}
