//! `fieldops-auth` — pure authorization boundary (zero-trust).
//!
//! This crate is intentionally decoupled from HTTP and storage: it holds the
//! static permission model and the RBAC evaluator, both pure functions over
//! role/ownership data. Token issuance and verification live in the external
//! authentication collaborator, never here.

pub mod authorize;
pub mod permissions;
pub mod principal;
pub mod roles;

pub use authorize::{authorize, AuthzTarget, Decision, DenyReason};
pub use permissions::{level_for, required_level, Action, PermissionLevel, ResourceType};
pub use principal::Principal;
pub use roles::Role;
