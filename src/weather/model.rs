use serde::Deserialize;

/// Current-weather payload as returned by the OpenWeatherMap `/weather`
/// endpoint. Field names follow the upstream JSON contract and must not be
/// renamed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherRecord {
    pub base: String,
    pub id: i64,
    /// City name as normalized by the API; display code uses the queried
    /// name instead.
    pub name: String,
    pub cod: i32,
    /// Offset from UTC in seconds
    pub timezone: i32,
    /// Observation time, epoch seconds
    pub dt: i64,
    /// Visibility in meters
    pub visibility: i64,
    pub coord: Coord,
    pub main: Main,
    pub wind: Wind,
    pub clouds: Clouds,
    pub sys: Sys,
    /// Conditions in API priority order; the first entry is primary
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Main {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Sea-level pressure in hPa
    pub pressure: i64,
    /// Relative humidity in percent
    pub humidity: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Wind {
    /// Wind speed in m/s (metric units)
    pub speed: f64,
    /// Wind direction in degrees; unused by the display layer
    #[serde(default)]
    pub deg: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Clouds {
    /// Cloud cover in percent
    pub all: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sys {
    /// Sunrise, epoch seconds
    pub sunrise: i64,
    /// Sunset, epoch seconds
    pub sunset: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    /// Condition label, e.g. "Rain"
    pub main: String,
    pub description: String,
}

impl WeatherRecord {
    /// Primary condition label, or `"unknown"` when the API sent no
    /// conditions at all.
    pub fn primary_condition(&self) -> &str {
        self.weather
            .first()
            .map(|c| c.main.as_str())
            .unwrap_or("unknown")
    }
}
