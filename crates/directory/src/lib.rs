//! `fieldops-directory` — the catalog of schedulable resources.
//!
//! Kits, locations, and staff are tracked here with identity and metadata.
//! Resources are append-mostly: immutable once created, except for the
//! geocoordinate backfill on locations. Geocoding is an always-attempted,
//! never-blocking enrichment - a geocoder outage never fails a create.

pub mod directory;
pub mod geocoding;
pub mod resource;
pub mod store;

pub use directory::{NewResource, ResourceDirectory};
pub use geocoding::{GeoPoint, GeocodingError, GeocodingProvider};
pub use resource::{Resource, ResourceDetails, ResourceKind};
pub use store::{ResourceStore, ResourceStoreError};
