use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherDataError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Resource not found: {url}")]
    NotFound { url: String },

    #[error("Failed to parse JSON from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No observation stations listed at {url}")]
    NoObservationStations { url: String },

    #[error("Forecast at {url} has no period {index}")]
    MissingPeriod { url: String, index: usize },

    #[error("Latest observation from {station} has no {field}")]
    MissingObservationValue { station: String, field: &'static str },

    #[error("Unknown temperature unit '{0}'")]
    UnknownTemperatureUnit(String),
}
