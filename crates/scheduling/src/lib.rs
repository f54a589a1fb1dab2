//! `fieldops-scheduling` — availability computation and booking lifecycle.
//!
//! The scheduler is the only component in the engine that needs mutual
//! exclusion: two concurrent requests for overlapping intervals on one
//! resource must not both commit. Exclusion is scoped per resource id;
//! requests against different resources never contend. Everything else in
//! this crate (the sweep, the booking entity) is pure and lock-free.

pub mod availability;
pub mod booking;
pub mod events;
pub mod retry;
pub mod scheduler;
pub mod store;

pub use availability::{free_intervals, AvailabilityEngine};
pub use booking::{Booking, BookingStatus};
pub use events::BookingEvent;
pub use retry::{BackoffStrategy, RetryPolicy};
pub use scheduler::{BookingScheduler, CancelBooking, RequestBooking};
pub use store::{BookingStore, BookingStoreError};
