use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fieldops_core::OrganizationId;

/// The structured unit handed to the external event sink.
///
/// - `name` is the stable event identifier (e.g. "booking.created").
/// - `organization_id` scopes the event to its tenant.
/// - `payload` is the event body, already serialized to JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    event_id: Uuid,
    organization_id: OrganizationId,
    name: String,
    occurred_at: DateTime<Utc>,
    payload: serde_json::Value,
}

impl EventRecord {
    pub fn new(
        organization_id: OrganizationId,
        name: impl Into<String>,
        occurred_at: DateTime<Utc>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            organization_id,
            name: name.into(),
            occurred_at,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}
