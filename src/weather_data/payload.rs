//! Serde shapes for the parts of the api.weather.gov GeoJSON documents this crate
//! reads. Unknown fields are ignored.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Where to find the forecast and the observation stations for a grid point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastPoint {
    pub forecast: String,
    pub observation_stations: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PointResponse {
    pub properties: PointProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PointProperties {
    pub forecast: String,
    pub observation_stations: String,
}

impl From<PointResponse> for ForecastPoint {
    fn from(response: PointResponse) -> Self {
        ForecastPoint {
            forecast: response.properties.forecast,
            observation_stations: response.properties.observation_stations,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StationCollection {
    #[serde(default)]
    pub features: Vec<StationFeature>,
}

#[derive(Debug, Deserialize)]
pub struct StationFeature {
    /// Full station URL, e.g. `https://api.weather.gov/stations/KRDU`.
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ObservationResponse {
    pub properties: Observation,
}

#[derive(Debug, Deserialize)]
pub struct Observation {
    #[serde(default)]
    pub icon: Option<String>,
    pub temperature: QuantitativeValue,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    pub unit_code: String,
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    #[serde(default)]
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub start_time: DateTime<FixedOffset>,
    pub is_daytime: bool,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default = "default_temperature_unit")]
    pub temperature_unit: String,
    #[serde(default)]
    pub icon: String,
}

fn default_temperature_unit() -> String {
    "F".to_string()
}
