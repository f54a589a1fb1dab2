//! Resource persistence boundary.

use thiserror::Error;

use fieldops_core::{OrganizationId, ResourceId};

use crate::geocoding::GeoPoint;
use crate::resource::{Resource, ResourceKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceStoreError {
    /// The store could not be reached or the transaction failed transiently.
    #[error("resource store unavailable: {0}")]
    Unavailable(String),

    #[error("resource not found")]
    NotFound,

    /// An insert reused an existing identifier.
    #[error("duplicate resource id")]
    DuplicateId,
}

/// Storage contract for the resource directory.
///
/// Resources are append-mostly; `set_geo` is the only mutation and exists
/// solely for the location coordinate backfill.
pub trait ResourceStore: Send + Sync {
    fn insert(&self, resource: Resource) -> Result<(), ResourceStoreError>;

    fn get(&self, id: ResourceId) -> Result<Option<Resource>, ResourceStoreError>;

    fn set_geo(&self, id: ResourceId, geo: GeoPoint) -> Result<Resource, ResourceStoreError>;

    fn list(
        &self,
        organization_id: OrganizationId,
        kind: ResourceKind,
    ) -> Result<Vec<Resource>, ResourceStoreError>;
}

impl<S> ResourceStore for std::sync::Arc<S>
where
    S: ResourceStore + ?Sized,
{
    fn insert(&self, resource: Resource) -> Result<(), ResourceStoreError> {
        (**self).insert(resource)
    }

    fn get(&self, id: ResourceId) -> Result<Option<Resource>, ResourceStoreError> {
        (**self).get(id)
    }

    fn set_geo(&self, id: ResourceId, geo: GeoPoint) -> Result<Resource, ResourceStoreError> {
        (**self).set_geo(id, geo)
    }

    fn list(
        &self,
        organization_id: OrganizationId,
        kind: ResourceKind,
    ) -> Result<Vec<Resource>, ResourceStoreError> {
        (**self).list(organization_id, kind)
    }
}
