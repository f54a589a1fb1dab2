//! RBAC evaluator.
//!
//! `authorize` is a pure function of the principal, the static permission
//! model, and the targeted record's ownership data. It holds no state and is
//! evaluated fresh before every mutating operation: roles and ownership may
//! change between calls within a long-lived process, so decisions are never
//! cached.

use serde::Serialize;

use fieldops_core::{OrganizationId, PrincipalId, ResourceId};

use crate::permissions::{level_for, required_level, Action, PermissionLevel, ResourceType};
use crate::principal::Principal;
use crate::roles::Role;

/// The minimal projection of a concrete record an authorization check needs.
///
/// Callers build this from a `Resource` or a `Booking`; the evaluator itself
/// stays independent of those types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthzTarget {
    pub resource_id: Option<ResourceId>,
    pub organization_id: OrganizationId,
    /// The principal that created the record, when the record tracks one.
    pub created_by: Option<PrincipalId>,
}

impl AuthzTarget {
    pub fn organization(organization_id: OrganizationId) -> Self {
        Self {
            resource_id: None,
            organization_id,
            created_by: None,
        }
    }

    pub fn owned(
        resource_id: ResourceId,
        organization_id: OrganizationId,
        created_by: PrincipalId,
    ) -> Self {
        Self {
            resource_id: Some(resource_id),
            organization_id,
            created_by: Some(created_by),
        }
    }
}

/// Why an authorization request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DenyReason {
    /// The target belongs to a different organization than the principal.
    CrossTenant,
    /// The principal's resolved level does not reach the action's bar.
    InsufficientLevel {
        required: PermissionLevel,
        resolved: PermissionLevel,
    },
}

impl core::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DenyReason::CrossTenant => f.write_str("cross-tenant access"),
            DenyReason::InsufficientLevel { required, resolved } => write!(
                f,
                "insufficient permission level (required {required:?}, resolved {resolved:?})"
            ),
        }
    }
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Decision::Allow => None,
            Decision::Deny(reason) => Some(*reason),
        }
    }
}

/// Can `principal` perform `action` on a record of `resource_type`?
///
/// - No IO
/// - No panics
/// - No business logic beyond the policy itself
///
/// Pass `target` whenever a concrete record is in play; without it only the
/// role-derived level applies (e.g. create-new checks scoped by the caller).
pub fn authorize(
    principal: &Principal,
    resource_type: ResourceType,
    action: Action,
    target: Option<&AuthzTarget>,
) -> Decision {
    // Tenant isolation comes first; only the global operator role crosses it.
    if let Some(target) = target {
        if target.organization_id != principal.organization_id && principal.role < Role::SuperAdmin
        {
            return Decision::Deny(DenyReason::CrossTenant);
        }
    }

    let owns = target.is_some_and(|t| {
        t.created_by == Some(principal.id)
            || t.resource_id.is_some_and(|id| principal.owns(id))
    });

    let mut resolved = level_for(principal.role, resource_type);
    if owns {
        // Self-ownership override: creators hold write over their own
        // records, capped below admin.
        resolved = resolved.max(PermissionLevel::Write);
    }

    let required = match action {
        // Removing a record you created yourself is a write-level act;
        // removing anyone else's still demands admin.
        Action::Delete if owns => PermissionLevel::Write,
        _ => required_level(action),
    };

    if resolved >= required {
        Decision::Allow
    } else {
        Decision::Deny(DenyReason::InsufficientLevel { required, resolved })
    }
}
