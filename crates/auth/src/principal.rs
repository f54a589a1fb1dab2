use serde::{Deserialize, Serialize};

use fieldops_core::{OrganizationId, PrincipalId, ResourceId};

use crate::roles::Role;

/// A fully resolved principal for authorization decisions.
///
/// Supplied by the external authentication collaborator once a credential has
/// been verified; immutable for the duration of a request and read-only to
/// the engine. The engine never issues or verifies credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: PrincipalId,
    pub role: Role,
    pub organization_id: OrganizationId,
    /// Direct resource ownerships granted outside the role system.
    #[serde(default)]
    pub owned_resources: Vec<ResourceId>,
}

impl Principal {
    pub fn new(id: PrincipalId, role: Role, organization_id: OrganizationId) -> Self {
        Self {
            id,
            role,
            organization_id,
            owned_resources: Vec::new(),
        }
    }

    pub fn with_owned_resources(mut self, resources: Vec<ResourceId>) -> Self {
        self.owned_resources = resources;
        self
    }

    pub fn owns(&self, resource_id: ResourceId) -> bool {
        self.owned_resources.contains(&resource_id)
    }
}
