//! Booking domain events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fieldops_events::EventRecord;

use crate::booking::Booking;

/// Facts the scheduler publishes after a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingEvent {
    Created(Booking),
    Cancelled(Booking),
}

impl BookingEvent {
    /// Stable event name (e.g. "booking.created").
    pub fn event_type(&self) -> &'static str {
        match self {
            BookingEvent::Created(_) => "booking.created",
            BookingEvent::Cancelled(_) => "booking.cancelled",
        }
    }

    pub fn booking(&self) -> &Booking {
        match self {
            BookingEvent::Created(b) | BookingEvent::Cancelled(b) => b,
        }
    }

    /// Flatten into the structured record the external sink consumes.
    pub fn to_record(&self, occurred_at: DateTime<Utc>) -> EventRecord {
        let booking = self.booking();
        let payload =
            serde_json::to_value(booking).unwrap_or(serde_json::Value::Null);
        EventRecord::new(
            booking.organization_id(),
            self.event_type(),
            occurred_at,
            payload,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingStatus;
    use chrono::TimeZone;
    use fieldops_core::{BookingId, OrganizationId, PrincipalId, ResourceId, TimeRange};

    #[test]
    fn record_carries_name_org_and_payload() {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 6, 1, 11, 0, 0).unwrap();
        let org = OrganizationId::new();
        let booking = Booking::new(
            BookingId::new(),
            ResourceId::new(),
            org,
            PrincipalId::new(),
            TimeRange::new(start, end).unwrap(),
            BookingStatus::Confirmed,
            start,
        );

        let record = BookingEvent::Created(booking).to_record(start);
        assert_eq!(record.name(), "booking.created");
        assert_eq!(record.organization_id(), org);
        assert_eq!(record.payload()["status"], "confirmed");
    }
}
