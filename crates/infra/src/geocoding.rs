//! Geocoder implementations for tests/dev.
//!
//! A production deployment adapts a real geocoding client behind
//! `GeocodingProvider`; these doubles cover wiring, tests, and offline
//! development.

use std::collections::HashMap;

use fieldops_directory::{GeoPoint, GeocodingError, GeocodingProvider};

/// Resolves from a fixed address table; unknown addresses are unavailable.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    known: HashMap<String, GeoPoint>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, address: impl Into<String>, point: GeoPoint) -> Self {
        self.known.insert(address.into(), point);
        self
    }
}

impl GeocodingProvider for StaticGeocoder {
    fn resolve(&self, address: &str) -> Result<GeoPoint, GeocodingError> {
        self.known
            .get(address)
            .copied()
            .ok_or_else(|| GeocodingError::Unavailable(format!("unknown address: {address}")))
    }
}

/// Always unavailable - models a geocoder outage.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGeocoder;

impl GeocodingProvider for OfflineGeocoder {
    fn resolve(&self, _address: &str) -> Result<GeoPoint, GeocodingError> {
        Err(GeocodingError::Unavailable("geocoder offline".to_string()))
    }
}
