//! The weather-service seam: a [`WeatherSource`] trait the assembler talks to, and
//! [`NwsClient`], its api.weather.gov implementation.

use crate::types::geo::LatLon;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::payload::{ForecastPoint, PointResponse};
use bon::bon;
use log::{debug, warn};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.weather.gov";
const DEFAULT_USER_AGENT: &str = concat!("regional_forecast/", env!("CARGO_PKG_VERSION"));

/// Something that can resolve grid points and fetch JSON documents.
pub trait WeatherSource {
    /// Looks up the forecast and observation-station URLs for a location.
    fn point(
        &self,
        location: LatLon,
    ) -> impl Future<Output = Result<ForecastPoint, WeatherDataError>> + Send;

    /// Fetches `url` and deserializes the body.
    fn fetch_json<T: DeserializeOwned + Send>(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<T, WeatherDataError>> + Send;
}

/// URL of the most recent observation for a station URL taken from a station list.
pub fn latest_observation_url(station: &str) -> String {
    format!("{}/observations/latest", station.trim_end_matches('/'))
}

/// Client for the US National Weather Service API.
///
/// # Examples
///
/// ```no_run
/// # use regional_forecast::{NwsClient, WeatherDataError};
/// # use std::time::Duration;
/// # fn main() -> Result<(), WeatherDataError> {
/// let client = NwsClient::builder()
///     .user_agent("(my-weather-display, ops@example.com)".to_string())
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: Client,
    base_url: String,
}

#[bon]
impl NwsClient {
    /// Builds a client. api.weather.gov rejects requests without a `User-Agent`,
    /// so one is always set. The timeout applies to each request on its own.
    #[builder]
    pub fn new(
        user_agent: Option<String>,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, WeatherDataError> {
        let user_agent = user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(WeatherDataError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    /// The points endpoint only accepts four decimal places.
    fn point_url(&self, location: LatLon) -> String {
        format!("{}/points/{:.4},{:.4}", self.base_url, location.0, location.1)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WeatherDataError> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/geo+json")
            .send()
            .await
            .map_err(|e| WeatherDataError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(match e.status() {
                    Some(status) if status == StatusCode::NOT_FOUND => WeatherDataError::NotFound {
                        url: url.to_string(),
                    },
                    Some(status) => WeatherDataError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    },
                    None => WeatherDataError::NetworkRequest(url.to_string(), e),
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| WeatherDataError::NetworkRequest(url.to_string(), e))?;

        serde_json::from_slice(&body).map_err(|e| WeatherDataError::JsonParse {
            url: url.to_string(),
            source: e,
        })
    }
}

impl WeatherSource for NwsClient {
    async fn point(&self, location: LatLon) -> Result<ForecastPoint, WeatherDataError> {
        let url = self.point_url(location);
        let response: PointResponse = self.get_json(&url).await?;
        Ok(response.into())
    }

    async fn fetch_json<T: DeserializeOwned + Send>(&self, url: &str) -> Result<T, WeatherDataError> {
        self.get_json(url).await
    }
}
