//! Device location boundary: coordinate lookup and reverse geocoding.

mod geocode;

pub use geocode::{GeocodeError, ReverseGeocoder};

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Geographic coordinates reported by a location provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location services are disabled")]
    ServicesDisabled,

    #[error("Location request timed out")]
    Timeout,

    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

/// Source of the device's current position. Implementations wrap whatever
/// platform service is available (GPS, network positioning, a fixed
/// override for headless setups).
#[async_trait]
pub trait LocateDevice: Send + Sync {
    async fn current_coordinates(&self) -> Result<Coordinates, LocationError>;
}

/// Resolve the device position, giving up after `timeout`.
///
/// Platform location lookups can stall indefinitely when no fix is
/// available; callers always go through this wrapper.
pub async fn locate_with_timeout(
    provider: &dyn LocateDevice,
    timeout: Duration,
) -> Result<Coordinates, LocationError> {
    match tokio::time::timeout(timeout, provider.current_coordinates()).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout_secs = timeout.as_secs(), "Location fix timed out");
            Err(LocationError::Timeout)
        }
    }
}
