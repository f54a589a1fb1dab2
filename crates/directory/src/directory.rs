//! The resource directory service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use fieldops_core::{DomainError, DomainResult, OrganizationId, ResourceId};

use crate::geocoding::GeocodingProvider;
use crate::resource::{Resource, ResourceDetails, ResourceKind};
use crate::store::{ResourceStore, ResourceStoreError};

/// Command: register a new schedulable resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewResource {
    pub organization_id: OrganizationId,
    pub details: ResourceDetails,
    pub created_at: DateTime<Utc>,
}

/// Directory of kits, locations, and staff.
///
/// Collaborators (store, geocoder) are injected at construction; the
/// directory owns resource identity assignment and the tolerant geocoding
/// enrichment, nothing else. No locking: resources are append-mostly.
#[derive(Debug, Clone)]
pub struct ResourceDirectory<S, G> {
    store: S,
    geocoder: G,
}

impl<S, G> ResourceDirectory<S, G>
where
    S: ResourceStore,
    G: GeocodingProvider,
{
    pub fn new(store: S, geocoder: G) -> Self {
        Self { store, geocoder }
    }

    /// Register a resource, assigning a fresh identity.
    ///
    /// Locations are enriched with coordinates when the geocoder answers;
    /// a geocoder failure is logged and the location is created with
    /// `geo = None`. Creation never fails on geocoding.
    pub fn create(&self, new: NewResource) -> DomainResult<Resource> {
        let id = ResourceId::new();
        let mut details = new.details;

        if let ResourceDetails::Location { address, geo, .. } = &mut details {
            if geo.is_none() {
                match self.geocoder.resolve(address) {
                    Ok(point) => *geo = Some(point),
                    Err(err) => {
                        warn!(resource_id = %id, error = %err, "geocoding failed; creating location without coordinates");
                    }
                }
            }
        }

        let resource = Resource::new(id, new.organization_id, details, new.created_at);
        self.store.insert(resource.clone()).map_err(map_store_err)?;
        Ok(resource)
    }

    pub fn get(&self, id: ResourceId) -> DomainResult<Resource> {
        self.store
            .get(id)
            .map_err(map_store_err)?
            .ok_or(DomainError::NotFound)
    }

    pub fn list(
        &self,
        organization_id: OrganizationId,
        kind: ResourceKind,
    ) -> DomainResult<Vec<Resource>> {
        self.store.list(organization_id, kind).map_err(map_store_err)
    }

    /// Retry coordinate enrichment for a location created while the
    /// geocoder was down. Still tolerant: a failed resolve leaves the
    /// resource untouched and returns it as-is.
    pub fn backfill_geo(&self, id: ResourceId) -> DomainResult<Resource> {
        let resource = self.get(id)?;

        let ResourceDetails::Location { address, geo, .. } = resource.details() else {
            return Err(DomainError::validation(
                "geocoordinate backfill applies to locations only",
            ));
        };

        if geo.is_some() {
            return Ok(resource);
        }

        match self.geocoder.resolve(address) {
            Ok(point) => self.store.set_geo(id, point).map_err(map_store_err),
            Err(err) => {
                warn!(resource_id = %id, error = %err, "geocoding still unavailable; backfill skipped");
                Ok(resource)
            }
        }
    }
}

fn map_store_err(err: ResourceStoreError) -> DomainError {
    match err {
        ResourceStoreError::Unavailable(msg) => DomainError::store_unavailable(msg),
        ResourceStoreError::NotFound => DomainError::NotFound,
        ResourceStoreError::DuplicateId => DomainError::conflict("duplicate resource id"),
    }
}
