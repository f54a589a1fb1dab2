//! Static permission model: roles x resource types -> levels.
//!
//! Everything here is a deterministic, total function. Unknown or ungranted
//! combinations resolve to `PermissionLevel::None` rather than failing, so
//! the evaluator never special-cases missing configuration.

use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// Totally ordered permission level.
///
/// A check for level L succeeds iff the resolved level is >= L.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionLevel {
    None,
    Read,
    Write,
    Admin,
}

/// The kinds of records the engine gates access to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Kit,
    Location,
    Booking,
    Staff,
    Organization,
}

/// Actions a principal can attempt against a resource type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
    RoleChange,
}

/// The level an action demands, independent of who is asking.
pub fn required_level(action: Action) -> PermissionLevel {
    match action {
        Action::Read => PermissionLevel::Read,
        Action::Create | Action::Update => PermissionLevel::Write,
        Action::Delete | Action::RoleChange => PermissionLevel::Admin,
    }
}

/// Role-specific grants, before hierarchy accumulation.
///
/// This table lists only what each role adds on top of the roles below it.
fn role_grant(role: Role, resource: ResourceType) -> PermissionLevel {
    use PermissionLevel as L;
    use ResourceType as R;

    match (role, resource) {
        // Guests can browse public location listings and nothing else.
        (Role::Guest, R::Location) => L::Read,
        (Role::Guest, _) => L::None,

        // Field staff run their own bookings and see the rest of the fleet.
        (Role::Staff, R::Booking) => L::Write,
        (Role::Staff, R::Kit | R::Staff | R::Organization) => L::Read,
        (Role::Staff, R::Location) => L::None,

        // Managers administer the schedulable inventory.
        (Role::Manager, R::Kit | R::Location | R::Staff) => L::Write,
        (Role::Manager, R::Booking | R::Organization) => L::None,

        (Role::Admin, R::Organization) => L::Write,
        (Role::Admin, _) => L::Admin,

        (Role::SuperAdmin, _) => L::Admin,
    }
}

/// Resolve the effective permission level for a role on a resource type.
///
/// Hierarchy semantics: the effective level is the maximum grant across the
/// role itself and every role beneath it, which makes grants monotone in the
/// role ordering by construction.
pub fn level_for(role: Role, resource: ResourceType) -> PermissionLevel {
    Role::ALL
        .iter()
        .filter(|r| r.rank() <= role.rank())
        .map(|r| role_grant(*r, resource))
        .max()
        .unwrap_or(PermissionLevel::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn levels_are_totally_ordered() {
        use PermissionLevel::*;
        assert!(None < Read && Read < Write && Write < Admin);
    }

    #[test]
    fn staff_write_bookings_but_cannot_delete_others() {
        assert_eq!(level_for(Role::Staff, ResourceType::Booking), PermissionLevel::Write);
        assert!(level_for(Role::Staff, ResourceType::Booking) < required_level(Action::Delete));
    }

    #[test]
    fn manager_inherits_staff_booking_grant() {
        // Managers add nothing booking-specific; the grant flows up from staff.
        assert_eq!(level_for(Role::Manager, ResourceType::Booking), PermissionLevel::Write);
    }

    #[test]
    fn guest_resolves_to_none_for_everything_but_locations() {
        assert_eq!(level_for(Role::Guest, ResourceType::Location), PermissionLevel::Read);
        assert_eq!(level_for(Role::Guest, ResourceType::Booking), PermissionLevel::None);
        assert_eq!(level_for(Role::Guest, ResourceType::Kit), PermissionLevel::None);
    }

    #[test]
    fn super_admin_holds_admin_everywhere() {
        for resource in [
            ResourceType::Kit,
            ResourceType::Location,
            ResourceType::Booking,
            ResourceType::Staff,
            ResourceType::Organization,
        ] {
            assert_eq!(level_for(Role::SuperAdmin, resource), PermissionLevel::Admin);
        }
    }

    fn any_role() -> impl Strategy<Value = Role> {
        prop::sample::select(Role::ALL.to_vec())
    }

    fn any_resource() -> impl Strategy<Value = ResourceType> {
        prop::sample::select(vec![
            ResourceType::Kit,
            ResourceType::Location,
            ResourceType::Booking,
            ResourceType::Staff,
            ResourceType::Organization,
        ])
    }

    proptest! {
        /// Property: any permission granted to a lower role is also granted
        /// to every higher role.
        #[test]
        fn grants_are_monotone_in_the_hierarchy(
            a in any_role(),
            b in any_role(),
            resource in any_resource(),
        ) {
            let (lo, hi) = if a.rank() <= b.rank() { (a, b) } else { (b, a) };
            prop_assert!(level_for(lo, resource) <= level_for(hi, resource));
        }
    }
}
