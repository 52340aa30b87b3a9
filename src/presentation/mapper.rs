use thiserror::Error;

use super::clock;
use super::theme::{ThemeResolver, ThemeSelection};
use crate::weather::WeatherRecord;

/// Display-ready snapshot derived from one [`WeatherRecord`].
///
/// Every field is a final string the shell can bind without further
/// formatting. A new `ViewState` replaces the previous one wholesale; fields
/// from two different fetches are never mixed.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// The name the user searched for, not the API-normalized one
    pub city_name: String,
    pub condition: String,
    pub temperature: String,
    pub min_temperature: String,
    pub max_temperature: String,
    pub humidity: String,
    pub wind_speed: String,
    pub pressure: String,
    pub sunrise: String,
    pub sunset: String,
    pub date: String,
    pub day_of_week: String,
    pub theme: ThemeSelection,
}

#[derive(Error, Debug, PartialEq)]
pub enum MalformedRecordError {
    #[error("Non-finite value in field {0}")]
    NonFiniteValue(&'static str),

    #[error("Humidity {0} is out of range")]
    HumidityOutOfRange(u32),

    #[error("Negative timestamp in field {0}")]
    NegativeTimestamp(&'static str),
}

/// Resolve a weather record into a display-ready [`ViewState`].
///
/// `queried_city` is shown verbatim as the city name; the API's normalized
/// `record.name` is deliberately ignored so the display matches what the
/// user asked for. The date and day fields are wall-clock based and are the
/// only non-deterministic part of the mapping.
pub fn map_to_view_state(
    record: &WeatherRecord,
    queried_city: &str,
    themes: &ThemeResolver,
) -> Result<ViewState, MalformedRecordError> {
    validate(record)?;

    let condition = record.primary_condition();
    let theme = themes.resolve(condition).selection();

    Ok(ViewState {
        city_name: queried_city.to_string(),
        condition: condition.to_string(),
        temperature: format!("{} °C", record.main.temp),
        min_temperature: format!("{} °C", record.main.temp_min),
        max_temperature: format!("{} °C", record.main.temp_max),
        humidity: format!("{} %", record.main.humidity),
        wind_speed: format!("{} m/s", record.wind.speed),
        pressure: format!("{} hPa", record.main.pressure),
        sunrise: clock::format_clock_time(record.sys.sunrise),
        sunset: clock::format_clock_time(record.sys.sunset),
        date: clock::format_current_date(),
        day_of_week: clock::format_day_of_week(),
        theme,
    })
}

fn validate(record: &WeatherRecord) -> Result<(), MalformedRecordError> {
    let finite_fields = [
        ("main.temp", record.main.temp),
        ("main.temp_min", record.main.temp_min),
        ("main.temp_max", record.main.temp_max),
        ("wind.speed", record.wind.speed),
    ];
    for (name, value) in finite_fields {
        if !value.is_finite() {
            return Err(MalformedRecordError::NonFiniteValue(name));
        }
    }

    if record.main.humidity > 100 {
        return Err(MalformedRecordError::HumidityOutOfRange(
            record.main.humidity,
        ));
    }

    if record.sys.sunrise < 0 {
        return Err(MalformedRecordError::NegativeTimestamp("sys.sunrise"));
    }
    if record.sys.sunset < 0 {
        return Err(MalformedRecordError::NegativeTimestamp("sys.sunset"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::theme::Theme;
    use crate::weather::{Clouds, Condition, Coord, Main, Sys, Wind};

    fn create_test_record() -> WeatherRecord {
        WeatherRecord {
            base: "stations".to_string(),
            id: 2950159,
            name: "Berlin".to_string(),
            cod: 200,
            timezone: 3600,
            dt: 1700000000,
            visibility: 10000,
            coord: Coord {
                lat: 52.5244,
                lon: 13.4105,
            },
            main: Main {
                temp: 18.5,
                temp_min: 17.0,
                temp_max: 20.1,
                pressure: 1013,
                humidity: 80,
            },
            wind: Wind {
                speed: 3.2,
                deg: Some(220),
            },
            clouds: Clouds { all: 75 },
            sys: Sys {
                sunrise: 21600,
                sunset: 64800,
            },
            weather: vec![Condition {
                main: "Rain".to_string(),
                description: "light rain".to_string(),
            }],
        }
    }

    fn resolver() -> ThemeResolver {
        ThemeResolver::new().unwrap()
    }

    #[test]
    fn test_berlin_example_end_to_end() {
        let view = map_to_view_state(&create_test_record(), "Berlin", &resolver()).unwrap();

        assert_eq!(view.temperature, "18.5 °C");
        assert_eq!(view.min_temperature, "17 °C");
        assert_eq!(view.max_temperature, "20.1 °C");
        assert_eq!(view.humidity, "80 %");
        assert_eq!(view.wind_speed, "3.2 m/s");
        assert_eq!(view.pressure, "1013 hPa");
        assert_eq!(view.condition, "Rain");
        assert_eq!(view.city_name, "Berlin");
        assert_eq!(view.theme.theme, Theme::Rainy);
        assert_eq!(view.theme.background_id, "rain_background");
    }

    #[test]
    fn test_queried_name_wins_over_api_name() {
        let record = create_test_record();
        assert_eq!(record.name, "Berlin");

        let view = map_to_view_state(&record, "NYC", &resolver()).unwrap();
        assert_eq!(view.city_name, "NYC");
    }

    #[test]
    fn test_empty_condition_list_maps_to_unknown() {
        let mut record = create_test_record();
        record.weather.clear();

        let view = map_to_view_state(&record, "Berlin", &resolver()).unwrap();
        assert_eq!(view.condition, "unknown");
        assert_eq!(view.theme.theme, Theme::Sunny);
    }

    #[test]
    fn test_sun_times_render_as_clock_times() {
        let view = map_to_view_state(&create_test_record(), "Berlin", &resolver()).unwrap();
        for field in [&view.sunrise, &view.sunset] {
            assert_eq!(field.len(), 5, "field: {field}");
            assert_eq!(field.as_bytes()[2], b':');
        }
    }

    #[test]
    fn test_mapping_is_deterministic_apart_from_wall_clock() {
        let record = create_test_record();
        let themes = resolver();

        let a = map_to_view_state(&record, "Berlin", &themes).unwrap();
        let b = map_to_view_state(&record, "Berlin", &themes).unwrap();

        assert_eq!(a.temperature, b.temperature);
        assert_eq!(a.condition, b.condition);
        assert_eq!(a.city_name, b.city_name);
        assert_eq!(a.sunrise, b.sunrise);
        assert_eq!(a.sunset, b.sunset);
        assert_eq!(a.theme, b.theme);
    }

    #[test]
    fn test_non_finite_temperature_is_rejected() {
        let mut record = create_test_record();
        record.main.temp = f64::NAN;

        let err = map_to_view_state(&record, "Berlin", &resolver()).unwrap_err();
        assert_eq!(err, MalformedRecordError::NonFiniteValue("main.temp"));
    }

    #[test]
    fn test_out_of_range_humidity_is_rejected() {
        let mut record = create_test_record();
        record.main.humidity = 150;

        let err = map_to_view_state(&record, "Berlin", &resolver()).unwrap_err();
        assert_eq!(err, MalformedRecordError::HumidityOutOfRange(150));
    }

    #[test]
    fn test_negative_sunrise_is_rejected() {
        let mut record = create_test_record();
        record.sys.sunrise = -1;

        let err = map_to_view_state(&record, "Berlin", &resolver()).unwrap_err();
        assert_eq!(err, MalformedRecordError::NegativeTimestamp("sys.sunrise"));
    }
}
