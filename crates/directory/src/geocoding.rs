//! Geocoding collaborator boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fieldops_core::ValueObject;

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl ValueObject for GeoPoint {}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeocodingError {
    /// The provider could not resolve the address or was unreachable.
    #[error("geocoding unavailable: {0}")]
    Unavailable(String),

    /// The provider did not answer within its time bound.
    #[error("geocoding timed out")]
    Timeout,
}

/// External address-to-coordinates resolver.
///
/// The only outbound call the engine makes. Implementations must be
/// internally time-bounded; every error is recoverable - callers log and
/// carry on without coordinates.
pub trait GeocodingProvider: Send + Sync {
    fn resolve(&self, address: &str) -> Result<GeoPoint, GeocodingError>;
}

impl<G> GeocodingProvider for std::sync::Arc<G>
where
    G: GeocodingProvider + ?Sized,
{
    fn resolve(&self, address: &str) -> Result<GeoPoint, GeocodingError> {
        (**self).resolve(address)
    }
}
