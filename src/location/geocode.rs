//! Reverse geocoding: convert device coordinates to a city name.
//!
//! Talks to a Nominatim-compatible endpoint (OpenStreetMap); no API key
//! required.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::Coordinates;

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("Geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("No place name found for {lat}, {lon}")]
    NoResult { lat: f64, lon: f64 },
}

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
}

#[derive(Debug, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
}

/// Resolves coordinates to the name of the place they fall in.
pub struct ReverseGeocoder {
    client: Client,
    base_url: String,
}

impl ReverseGeocoder {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Look up the city name for a coordinate pair.
    ///
    /// An answer with no usable place name is an error the caller can
    /// surface and retry, not a silent miss.
    pub async fn city_name(&self, position: Coordinates) -> Result<String, GeocodeError> {
        tracing::debug!(lat = position.lat, lon = position.lon, "Reverse geocoding position");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("lat", position.lat.to_string()),
                ("lon", position.lon.to_string()),
                ("format", "json".to_string()),
                ("addressdetails", "1".to_string()),
                ("zoom", "10".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: NominatimResponse = response.json().await?;

        let place = body
            .address
            .and_then(pick_place)
            .ok_or(GeocodeError::NoResult {
                lat: position.lat,
                lon: position.lon,
            })?;

        tracing::info!(city = %place, "Reverse geocoded position");
        Ok(place)
    }
}

// Prefer city > town > village > municipality for the place name
fn pick_place(addr: NominatimAddress) -> Option<String> {
    addr.city
        .or(addr.town)
        .or(addr.village)
        .or(addr.municipality)
}
