use serde::{Deserialize, Serialize};

/// Role in the ordered privilege hierarchy.
///
/// Ordering is strictly increasing privilege: a role at rank N implicitly
/// holds every permission granted to ranks below N. Privilege comparisons
/// go through `rank()` (or the derived `Ord`), never through per-role
/// conditional chains.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Guest,
    Staff,
    Manager,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Numeric privilege rank (higher = more privileged).
    pub fn rank(&self) -> u8 {
        match self {
            Role::Guest => 0,
            Role::Staff => 1,
            Role::Manager => 2,
            Role::Admin => 3,
            Role::SuperAdmin => 4,
        }
    }

    /// All roles, lowest privilege first.
    pub const ALL: [Role; 5] = [
        Role::Guest,
        Role::Staff,
        Role::Manager,
        Role::Admin,
        Role::SuperAdmin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Staff => "staff",
            Role::Manager => "manager",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
