use crate::cities::error::CatalogError;
use crate::weather_data::error::WeatherDataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegionalForecastError {
    #[error(transparent)]
    WeatherData(#[from] WeatherDataError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("No regional forecast data available ({cities_tried} cities tried)")]
    NoDataAvailable { cities_tried: usize },

    #[error("Regional forecast data has not been loaded")]
    NotLoaded,

    #[error("Screen index {0} is out of range")]
    InvalidScreen(usize),
}
