mod cities;
mod error;
mod icons;
pub mod project;
mod regional_forecast;
mod render;
mod types;
mod units;
mod weather_data;

pub use error::RegionalForecastError;
pub use regional_forecast::*;

pub use cities::catalog::{CityCatalog, CuratedCity, StationInfo};
pub use cities::error::CatalogError;
pub use cities::name::format_city_name;
pub use cities::selector::{place, select};

pub use icons::regional_icon;
pub use render::{
    place_label, screen_title, LabelPlacement, MapCanvas, MapRenderer, Rect, TextStyle,
    MAP_HEIGHT, MAP_WIDTH, MAP_Y_OFFSET,
};

pub use types::city::{CandidateCity, SelectedCity};
pub use types::forecast::{CityForecast, ForecastRecord, RegionalData, Screen};
pub use types::geo::{BoundingBox, LatLon, PixelPosition, SourcePoint, ViewportOffset};
pub use types::region::{ProjectionConstants, Region};

pub use units::{celsius_to_fahrenheit, fahrenheit_to_celsius, DisplayUnits, TemperatureUnit};

pub use weather_data::assembler::{AssembledForecast, CityFailure, ForecastAssembler};
pub use weather_data::error::WeatherDataError;
pub use weather_data::payload::{
    ForecastPeriod, ForecastPoint, ForecastResponse, Observation, ObservationResponse,
    QuantitativeValue, StationCollection, StationFeature, ForecastProperties,
};
pub use weather_data::source::{latest_observation_url, NwsClient, WeatherSource};
