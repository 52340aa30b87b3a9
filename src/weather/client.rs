use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::model::WeatherRecord;
use crate::config::AppConfig;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Failed to fetch weather data: {0}")]
    Request(#[from] reqwest::Error),

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Fetch boundary used by the session layer. Lets tests and alternative
/// transports stand in for the real HTTP client.
#[async_trait]
pub trait FetchWeather: Send + Sync {
    async fn fetch(&self, city: &str) -> Result<WeatherRecord, WeatherError>;
}

/// Client for the OpenWeatherMap current-weather endpoint.
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    units: String,
}

impl WeatherClient {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            units: config.units.clone(),
        }
    }

    /// Build a client with its own timeout-configured HTTP transport.
    pub fn from_config(config: &AppConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .build()?;

        Ok(Self::new(client, config))
    }

    pub async fn fetch(&self, city: &str) -> Result<WeatherRecord, WeatherError> {
        tracing::debug!(city = %city, units = %self.units, "Fetching weather data");

        // Use query builder for proper URL encoding - handles spaces and special chars
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", city), ("appid", &self.api_key), ("units", &self.units)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = %status, "Received API response");

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(WeatherError::CityNotFound(city.to_string()));
        }

        if !status.is_success() {
            let error: ApiErrorBody = response.json().await.unwrap_or(ApiErrorBody {
                message: format!("HTTP {}", status),
            });
            return Err(WeatherError::Api(error.message));
        }

        let record: WeatherRecord = response
            .json()
            .await
            .map_err(|e| WeatherError::InvalidResponse(e.to_string()))?;

        tracing::info!(city = %record.name, temp = record.main.temp, "Weather data fetched");

        Ok(record)
    }
}

#[async_trait]
impl FetchWeather for WeatherClient {
    async fn fetch(&self, city: &str) -> Result<WeatherRecord, WeatherError> {
        WeatherClient::fetch(self, city).await
    }
}
