use config::{Case, Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// OpenWeatherMap API key
    pub api_key: String,

    /// Current-weather endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Temperature units: metric, imperial, or standard
    #[serde(default = "default_units")]
    pub units: String,

    /// Reverse-geocoding endpoint (Nominatim-compatible)
    #[serde(default = "default_geocoder_url")]
    pub geocoder_url: String,

    /// Seconds to wait for a device location fix before giving up
    #[serde(default = "default_location_timeout_secs")]
    pub location_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5/weather".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_geocoder_url() -> String {
    "https://nominatim.openstreetmap.org/reverse".to_string()
}

fn default_location_timeout_secs() -> u64 {
    15
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Start with default values
            .set_default("base_url", default_base_url())?
            .set_default("units", default_units())?
            .set_default("geocoder_url", default_geocoder_url())?
            // Load from config file if present
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config.local").required(false))
            // Override with environment variables (prefixed with NIMBUS_)
            // Convert SCREAMING_SNAKE_CASE env vars to snake_case config keys
            .add_source(
                Environment::with_prefix("NIMBUS")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(Case::Snake)
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
