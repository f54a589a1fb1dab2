use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fieldops_core::{BookingId, Entity, OrganizationId, PrincipalId, ResourceId, TimeRange};

/// Booking lifecycle status.
///
/// `Pending` and `Confirmed` both hold the resource's timeline; `Cancelled`
/// releases it. This engine commits straight to `Confirmed` (approval
/// workflows live outside the core), but the sweep honors `Pending` rows
/// seeded by other writers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// A reservation of one resource for one half-open interval.
///
/// Immutable once `Cancelled`; the only legal transitions are
/// pending/confirmed -> cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    resource_id: ResourceId,
    organization_id: OrganizationId,
    requested_by: PrincipalId,
    period: TimeRange,
    status: BookingStatus,
    requested_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        id: BookingId,
        resource_id: ResourceId,
        organization_id: OrganizationId,
        requested_by: PrincipalId,
        period: TimeRange,
        status: BookingStatus,
        requested_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            resource_id,
            organization_id,
            requested_by,
            period,
            status,
            requested_at,
        }
    }

    pub fn id_typed(&self) -> BookingId {
        self.id
    }

    pub fn resource_id(&self) -> ResourceId {
        self.resource_id
    }

    pub fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    pub fn requested_by(&self) -> PrincipalId {
        self.requested_by
    }

    pub fn period(&self) -> TimeRange {
        self.period
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }

    /// Whether this booking occupies its resource's timeline.
    pub fn blocks_timeline(&self) -> bool {
        matches!(self.status, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }

    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }
}

impl Entity for Booking {
    type Id = BookingId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_booking(status: BookingStatus) -> Booking {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 6, 1, 11, 0, 0).unwrap();
        Booking::new(
            BookingId::new(),
            ResourceId::new(),
            OrganizationId::new(),
            PrincipalId::new(),
            TimeRange::new(start, end).unwrap(),
            status,
            start,
        )
    }

    #[test]
    fn pending_and_confirmed_block_the_timeline() {
        assert!(test_booking(BookingStatus::Pending).blocks_timeline());
        assert!(test_booking(BookingStatus::Confirmed).blocks_timeline());
        assert!(!test_booking(BookingStatus::Cancelled).blocks_timeline());
    }

    #[test]
    fn status_round_trips_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
    }
}
