//! Infrastructure layer: store implementations, geocoder doubles, and the
//! composition root.
//!
//! Production deployments swap the in-memory stores for adapters over the
//! platform's transactional row store; the traits in `fieldops-directory`
//! and `fieldops-scheduling` are the boundary.

pub mod engine;
pub mod geocoding;
pub mod stores;

#[cfg(test)]
mod integration_tests;

pub use engine::Engine;
pub use geocoding::{OfflineGeocoder, StaticGeocoder};
pub use stores::{InMemoryBookingStore, InMemoryResourceStore};
