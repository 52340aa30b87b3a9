mod client;
mod model;

pub use client::{FetchWeather, WeatherClient, WeatherError};
pub use model::{Clouds, Condition, Coord, Main, Sys, WeatherRecord, Wind};
