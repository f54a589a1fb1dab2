use std::collections::HashMap;
use std::sync::RwLock;

use fieldops_core::{OrganizationId, ResourceId};
use fieldops_directory::{GeoPoint, Resource, ResourceKind, ResourceStore, ResourceStoreError};

/// In-memory resource table.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryResourceStore {
    rows: RwLock<HashMap<ResourceId, Resource>>,
}

impl InMemoryResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn rows_read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<ResourceId, Resource>>, ResourceStoreError>
    {
        self.rows
            .read()
            .map_err(|_| ResourceStoreError::Unavailable("lock poisoned".to_string()))
    }

    fn rows_write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<ResourceId, Resource>>, ResourceStoreError>
    {
        self.rows
            .write()
            .map_err(|_| ResourceStoreError::Unavailable("lock poisoned".to_string()))
    }
}

impl ResourceStore for InMemoryResourceStore {
    fn insert(&self, resource: Resource) -> Result<(), ResourceStoreError> {
        let mut rows = self.rows_write()?;
        if rows.contains_key(&resource.id_typed()) {
            return Err(ResourceStoreError::DuplicateId);
        }
        rows.insert(resource.id_typed(), resource);
        Ok(())
    }

    fn get(&self, id: ResourceId) -> Result<Option<Resource>, ResourceStoreError> {
        Ok(self.rows_read()?.get(&id).cloned())
    }

    fn set_geo(&self, id: ResourceId, geo: GeoPoint) -> Result<Resource, ResourceStoreError> {
        let mut rows = self.rows_write()?;
        let resource = rows.get(&id).cloned().ok_or(ResourceStoreError::NotFound)?;
        let updated = resource.with_geo(geo);
        rows.insert(id, updated.clone());
        Ok(updated)
    }

    fn list(
        &self,
        organization_id: OrganizationId,
        kind: ResourceKind,
    ) -> Result<Vec<Resource>, ResourceStoreError> {
        let mut out: Vec<Resource> = self
            .rows_read()?
            .values()
            .filter(|r| r.organization_id() == organization_id && r.kind() == kind)
            .cloned()
            .collect();
        // Stable order for callers and tests (ids are time-ordered v7).
        out.sort_by_key(|r| *r.id_typed().as_uuid());
        Ok(out)
    }
}
