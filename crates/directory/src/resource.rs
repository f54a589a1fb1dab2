use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fieldops_core::{Entity, OrganizationId, ResourceId};

use crate::geocoding::GeoPoint;

/// The schedulable resource kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Kit,
    Location,
    Staff,
}

/// Kind-specific metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ResourceDetails {
    Kit {
        name: String,
        asset_tag: Option<String>,
    },
    Location {
        name: String,
        address: String,
        /// Populated by the geocoding collaborator; absence is a valid state.
        geo: Option<GeoPoint>,
    },
    Staff {
        name: String,
        email: Option<String>,
    },
}

impl ResourceDetails {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceDetails::Kit { .. } => ResourceKind::Kit,
            ResourceDetails::Location { .. } => ResourceKind::Location,
            ResourceDetails::Staff { .. } => ResourceKind::Staff,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ResourceDetails::Kit { name, .. }
            | ResourceDetails::Location { name, .. }
            | ResourceDetails::Staff { name, .. } => name,
        }
    }
}

/// A schedulable resource.
///
/// Referenced, never duplicated, by the booking scheduler. Immutable once
/// created except for the location geocoordinate backfill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    id: ResourceId,
    organization_id: OrganizationId,
    details: ResourceDetails,
    created_at: DateTime<Utc>,
}

impl Resource {
    pub fn new(
        id: ResourceId,
        organization_id: OrganizationId,
        details: ResourceDetails,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            organization_id,
            details,
            created_at,
        }
    }

    pub fn id_typed(&self) -> ResourceId {
        self.id
    }

    pub fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    pub fn kind(&self) -> ResourceKind {
        self.details.kind()
    }

    pub fn details(&self) -> &ResourceDetails {
        &self.details
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn geo(&self) -> Option<GeoPoint> {
        match &self.details {
            ResourceDetails::Location { geo, .. } => *geo,
            _ => None,
        }
    }

    /// Backfill coordinates onto a location. No-op for other kinds.
    pub fn with_geo(mut self, point: GeoPoint) -> Self {
        if let ResourceDetails::Location { geo, .. } = &mut self.details {
            *geo = Some(point);
        }
        self
    }
}

impl Entity for Resource {
    type Id = ResourceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
