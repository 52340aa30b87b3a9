//! Current-weather display core.
//!
//! Resolves a city name (searched by the user, or reverse-geocoded from
//! device coordinates) into a display-ready snapshot of the current weather:
//! formatted strings plus a visual theme picked from the reported condition.
//! The rendering shell subscribes to [`session::WeatherSession`] and binds
//! whatever [`presentation::ViewState`] it publishes.

pub mod config;
pub mod location;
pub mod presentation;
pub mod session;
pub mod weather;

pub use config::AppConfig;
pub use presentation::{map_to_view_state, Theme, ThemeResolver, ViewState};
pub use session::{Display, WeatherSession};
pub use weather::{FetchWeather, WeatherClient, WeatherError, WeatherRecord};
