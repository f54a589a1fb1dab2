//! Booking lifecycle service.
//!
//! Owns every booking state transition. Authorization is evaluated fresh on
//! each call, the availability check and insert run under a per-resource
//! mutex, and transient store failures are retried with bounded backoff at
//! this commit boundary only.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use fieldops_auth::{authorize, Action, AuthzTarget, Decision, Principal, ResourceType, Role};
use fieldops_core::{
    BookingId, DomainError, DomainResult, OrganizationId, ResourceId, TimeRange,
};
use fieldops_directory::{ResourceStore, ResourceStoreError};
use fieldops_events::{EventRecord, EventSink, Notifier};

use crate::availability::AvailabilityEngine;
use crate::booking::{Booking, BookingStatus};
use crate::events::BookingEvent;
use crate::retry::RetryPolicy;
use crate::store::{BookingStore, BookingStoreError};

/// Command: reserve a resource for a half-open interval.
///
/// `requested_at` is the receipt time stamped by the caller; it anchors the
/// no-retroactive-bookings check and becomes the booking's creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBooking {
    pub resource_id: ResourceId,
    pub period: TimeRange,
    pub requested_at: DateTime<Utc>,
}

/// Command: cancel a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelBooking {
    pub booking_id: BookingId,
    pub requested_at: DateTime<Utc>,
}

/// The booking scheduler.
///
/// Collaborators are injected at construction (no globals, no service
/// locator); the composition root owns their lifecycle. The lock table is
/// keyed by resource id so requests against different resources never
/// serialize against each other.
pub struct BookingScheduler<B, R, S> {
    bookings: B,
    resources: R,
    availability: AvailabilityEngine<B>,
    notifier: Notifier<S>,
    retry: RetryPolicy,
    locks: Mutex<HashMap<ResourceId, Arc<Mutex<()>>>>,
}

impl<B, R, S> BookingScheduler<B, R, S>
where
    B: BookingStore + Clone,
    R: ResourceStore,
    S: EventSink<EventRecord>,
{
    pub fn new(bookings: B, resources: R, notifier: Notifier<S>, retry: RetryPolicy) -> Self {
        let availability = AvailabilityEngine::new(bookings.clone());
        Self {
            bookings,
            resources,
            availability,
            notifier,
            retry,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Reserve `cmd.period` on `cmd.resource_id` for `principal`.
    ///
    /// Fails with `Unauthorized`, `NotFound`, `InvalidInterval`, `Conflict`,
    /// or - after bounded retries - `StoreUnavailable`. On success the
    /// booking is committed as `Confirmed` and `booking.created` is
    /// published fire-and-forget.
    pub fn request_booking(
        &self,
        principal: &Principal,
        cmd: RequestBooking,
    ) -> DomainResult<Booking> {
        // TimeRange construction already guarantees end > start; only the
        // retroactive check remains. Admins may backfill.
        if cmd.period.start() < cmd.requested_at && principal.role < Role::Admin {
            return Err(DomainError::invalid_interval(
                "booking starts in the past",
            ));
        }

        let resource = self
            .resources
            .get(cmd.resource_id)
            .map_err(map_resource_err)?
            .ok_or(DomainError::NotFound)?;

        let target = AuthzTarget::organization(resource.organization_id());
        if let Decision::Deny(reason) =
            authorize(principal, ResourceType::Booking, Action::Create, Some(&target))
        {
            return Err(DomainError::unauthorized(reason.to_string()));
        }

        let booking = {
            let lock = self.lock_for(cmd.resource_id);
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            self.commit_with_retry(principal, &cmd, resource.organization_id())?
        };

        info!(
            booking_id = %booking.id_typed(),
            resource_id = %cmd.resource_id,
            period = %cmd.period,
            "booking confirmed"
        );
        self.notifier
            .notify(BookingEvent::Created(booking.clone()).to_record(cmd.requested_at));

        Ok(booking)
    }

    /// Cancel a booking. Idempotent: cancelling an already-cancelled
    /// booking succeeds without re-publishing the event.
    pub fn cancel_booking(
        &self,
        principal: &Principal,
        cmd: CancelBooking,
    ) -> DomainResult<Booking> {
        let booking = self
            .bookings
            .get(cmd.booking_id)
            .map_err(map_booking_err)?
            .ok_or(DomainError::NotFound)?;

        if booking.is_cancelled() {
            return Ok(booking);
        }

        let target = AuthzTarget {
            resource_id: None,
            organization_id: booking.organization_id(),
            created_by: Some(booking.requested_by()),
        };
        if let Decision::Deny(reason) =
            authorize(principal, ResourceType::Booking, Action::Delete, Some(&target))
        {
            return Err(DomainError::unauthorized(reason.to_string()));
        }

        let cancelled = self
            .bookings
            .update_status(cmd.booking_id, BookingStatus::Cancelled)
            .map_err(map_booking_err)?;

        info!(booking_id = %cmd.booking_id, "booking cancelled");
        self.notifier
            .notify(BookingEvent::Cancelled(cancelled.clone()).to_record(cmd.requested_at));

        Ok(cancelled)
    }

    /// Fetch a single booking, subject to a read check.
    pub fn get_booking(&self, principal: &Principal, id: BookingId) -> DomainResult<Booking> {
        let booking = self
            .bookings
            .get(id)
            .map_err(map_booking_err)?
            .ok_or(DomainError::NotFound)?;

        let target = AuthzTarget {
            resource_id: None,
            organization_id: booking.organization_id(),
            created_by: Some(booking.requested_by()),
        };
        if let Decision::Deny(reason) =
            authorize(principal, ResourceType::Booking, Action::Read, Some(&target))
        {
            return Err(DomainError::unauthorized(reason.to_string()));
        }

        Ok(booking)
    }

    /// The blocking bookings for a resource within a range, subject to a
    /// read check against the resource's organization.
    pub fn bookings_for_resource(
        &self,
        principal: &Principal,
        resource_id: ResourceId,
        range: TimeRange,
    ) -> DomainResult<Vec<Booking>> {
        let resource = self
            .resources
            .get(resource_id)
            .map_err(map_resource_err)?
            .ok_or(DomainError::NotFound)?;

        let target = AuthzTarget::organization(resource.organization_id());
        if let Decision::Deny(reason) =
            authorize(principal, ResourceType::Booking, Action::Read, Some(&target))
        {
            return Err(DomainError::unauthorized(reason.to_string()));
        }

        self.bookings
            .active_for_resource(resource_id, range)
            .map_err(map_booking_err)
    }

    fn lock_for(&self, resource_id: ResourceId) -> Arc<Mutex<()>> {
        let mut locks = self
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        locks.entry(resource_id).or_default().clone()
    }

    fn commit_with_retry(
        &self,
        principal: &Principal,
        cmd: &RequestBooking,
        organization_id: OrganizationId,
    ) -> DomainResult<Booking> {
        let mut attempt = 1u32;
        loop {
            match self.try_commit(principal, cmd, organization_id) {
                Err(DomainError::StoreUnavailable(msg)) if attempt < self.retry.max_attempts => {
                    warn!(
                        resource_id = %cmd.resource_id,
                        attempt,
                        error = %msg,
                        "transient store failure; backing off"
                    );
                    thread::sleep(self.retry.delay_for(attempt));
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    /// One availability-check-then-insert pass. Runs under the resource
    /// lock, so the window between check and insert is closed.
    fn try_commit(
        &self,
        principal: &Principal,
        cmd: &RequestBooking,
        organization_id: OrganizationId,
    ) -> DomainResult<Booking> {
        let free = self.availability.availability(cmd.resource_id, cmd.period)?;
        if !free.iter().any(|window| window.contains(&cmd.period)) {
            debug!(resource_id = %cmd.resource_id, period = %cmd.period, "interval unavailable");
            return Err(DomainError::conflict(format!(
                "interval {} is not available",
                cmd.period
            )));
        }

        let booking = Booking::new(
            BookingId::new(),
            cmd.resource_id,
            organization_id,
            principal.id,
            cmd.period,
            BookingStatus::Confirmed,
            cmd.requested_at,
        );
        self.bookings
            .insert(booking.clone())
            .map_err(map_booking_err)?;
        Ok(booking)
    }
}

fn map_booking_err(err: BookingStoreError) -> DomainError {
    match err {
        BookingStoreError::Unavailable(msg) => DomainError::store_unavailable(msg),
        BookingStoreError::NotFound => DomainError::NotFound,
        BookingStoreError::DuplicateId => DomainError::conflict("duplicate booking id"),
    }
}

fn map_resource_err(err: ResourceStoreError) -> DomainError {
    match err {
        ResourceStoreError::Unavailable(msg) => DomainError::store_unavailable(msg),
        ResourceStoreError::NotFound => DomainError::NotFound,
        ResourceStoreError::DuplicateId => DomainError::conflict("duplicate resource id"),
    }
}
